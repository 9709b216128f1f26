//! Seed data for the storefront catalog
//!
//! The catalog is populated once at process start and never mutated. Image
//! paths point into the assets directory served alongside the widget.

use super::models::{Category, Product, Review};

/// Builds the product list in catalog order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Уютное кресло \"Комфорт\"".to_string(),
            price: 45900,
            category: "furniture".to_string(),
            image: "/img/99b15021-dace-43c6-a9c0-4a88de030462.jpg".to_string(),
            images: Some(vec![
                "/img/99b15021-dace-43c6-a9c0-4a88de030462.jpg".to_string(),
                "/img/f875343e-7bcc-432d-809b-121f2bcabaa0.jpg".to_string(),
                "/img/b0f20acc-c7d6-4f6c-a088-357d1c807c80.jpg".to_string(),
            ]),
            rating: 4.8,
            reviews: 127,
            description: "Мягкое кресло с эргономичной спинкой для максимального комфорта"
                .to_string(),
            full_description: Some(
                "Кресло \"Комфорт\" сочетает анатомическую поддержку спины с мягкой \
                 обивкой из износостойкой ткани. Каркас из массива берёзы рассчитан \
                 на ежедневное использование."
                    .to_string(),
            ),
            specifications: Some(vec![
                "Размеры: 85 × 90 × 100 см".to_string(),
                "Каркас: массив берёзы".to_string(),
                "Обивка: велюр, съёмные чехлы".to_string(),
                "Максимальная нагрузка: 150 кг".to_string(),
            ]),
        },
        Product {
            id: 2,
            name: "Садовый набор \"Релакс\"".to_string(),
            price: 89900,
            category: "outdoor".to_string(),
            image: "/img/f875343e-7bcc-432d-809b-121f2bcabaa0.jpg".to_string(),
            images: Some(vec![
                "/img/f875343e-7bcc-432d-809b-121f2bcabaa0.jpg".to_string(),
                "/img/99b15021-dace-43c6-a9c0-4a88de030462.jpg".to_string(),
            ]),
            rating: 4.6,
            reviews: 84,
            description: "Стильная мебель для отдыха на открытом воздухе".to_string(),
            full_description: Some(
                "Набор из дивана, двух кресел и столика из ротанга. Подушки в \
                 комплекте, материалы устойчивы к влаге и выгоранию."
                    .to_string(),
            ),
            specifications: Some(vec![
                "Состав: диван, 2 кресла, столик".to_string(),
                "Материал: искусственный ротанг".to_string(),
                "Подушки в комплекте".to_string(),
            ]),
        },
        Product {
            id: 3,
            name: "Набор для кухни \"Домашний\"".to_string(),
            price: 15900,
            category: "accessories".to_string(),
            image: "/img/b0f20acc-c7d6-4f6c-a088-357d1c807c80.jpg".to_string(),
            images: None,
            rating: 4.9,
            reviews: 203,
            description: "Современные аксессуары для уютной кухни".to_string(),
            full_description: None,
            specifications: None,
        },
        Product {
            id: 4,
            name: "Плед \"Тепло дома\"".to_string(),
            price: 3900,
            category: "accessories".to_string(),
            image: "/img/99b15021-dace-43c6-a9c0-4a88de030462.jpg".to_string(),
            images: None,
            rating: 4.7,
            reviews: 156,
            description: "Мягкий плед из натуральных материалов".to_string(),
            full_description: None,
            specifications: Some(vec![
                "Размер: 150 × 200 см".to_string(),
                "Состав: 100% хлопок".to_string(),
            ]),
        },
        Product {
            id: 5,
            name: "Диван \"Семейный очаг\"".to_string(),
            price: 67900,
            category: "furniture".to_string(),
            image: "/img/99b15021-dace-43c6-a9c0-4a88de030462.jpg".to_string(),
            images: Some(vec![
                "/img/99b15021-dace-43c6-a9c0-4a88de030462.jpg".to_string(),
                "/img/b0f20acc-c7d6-4f6c-a088-357d1c807c80.jpg".to_string(),
            ]),
            rating: 4.8,
            reviews: 92,
            description: "Просторный диван для всей семьи".to_string(),
            full_description: Some(
                "Трёхместный диван с раскладным механизмом \"еврокнижка\" и \
                 вместительным бельевым ящиком."
                    .to_string(),
            ),
            specifications: None,
        },
        Product {
            id: 6,
            name: "Гриль \"Барбекю мастер\"".to_string(),
            price: 34900,
            category: "outdoor".to_string(),
            image: "/img/f875343e-7bcc-432d-809b-121f2bcabaa0.jpg".to_string(),
            images: None,
            rating: 4.5,
            reviews: 67,
            description: "Профессиональный гриль для дачи и пикников".to_string(),
            full_description: None,
            specifications: None,
        },
    ]
}

/// Builds the review list in catalog order.
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            product_id: 1,
            author: "Анна К.".to_string(),
            rating: 5,
            comment: "Кресло просто замечательное! Очень удобное и красивое.".to_string(),
            date: "2024-01-15".to_string(),
        },
        Review {
            id: 2,
            product_id: 1,
            author: "Михаил П.".to_string(),
            rating: 5,
            comment: "Отличное качество материалов, сидеть очень комфортно.".to_string(),
            date: "2024-01-20".to_string(),
        },
        Review {
            id: 3,
            product_id: 2,
            author: "Елена В.".to_string(),
            rating: 4,
            comment: "Красивый набор, подошел идеально для нашей террасы.".to_string(),
            date: "2024-01-18".to_string(),
        },
        Review {
            id: 4,
            product_id: 3,
            author: "Дмитрий С.".to_string(),
            rating: 5,
            comment: "Качественные аксессуары, рекомендую!".to_string(),
            date: "2024-01-22".to_string(),
        },
    ]
}

/// Builds the category table shown in the storefront chrome.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: "all".to_string(),
            name: "Все товары".to_string(),
            icon: "Home".to_string(),
        },
        Category {
            id: "furniture".to_string(),
            name: "Мебель".to_string(),
            icon: "Armchair".to_string(),
        },
        Category {
            id: "outdoor".to_string(),
            name: "Для отдыха".to_string(),
            icon: "TreePine".to_string(),
        },
        Category {
            id: "accessories".to_string(),
            name: "Аксессуары".to_string(),
            icon: "Package".to_string(),
        },
    ]
}
