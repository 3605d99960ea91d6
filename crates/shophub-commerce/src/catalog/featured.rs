//! The fixed featured-products list, available without the catalog API.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

struct Featured {
    id: i64,
    title: &'static str,
    price_cents: i64,
    image: &'static str,
    category: &'static str,
    description: &'static str,
}

const FEATURED: &[Featured] = &[
    Featured {
        id: 1,
        title: "Premium Wireless Headphones",
        price_cents: 29999,
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
        category: "Electronics",
        description: "High-quality wireless headphones with noise cancellation",
    },
    Featured {
        id: 2,
        title: "Smart Watch Pro",
        price_cents: 39999,
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
        category: "Electronics",
        description: "Advanced smartwatch with health tracking features",
    },
    Featured {
        id: 3,
        title: "Designer Backpack",
        price_cents: 8999,
        image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500",
        category: "Fashion",
        description: "Stylish and durable backpack for everyday use",
    },
    Featured {
        id: 4,
        title: "Portable Speaker",
        price_cents: 14999,
        image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500",
        category: "Electronics",
        description: "Waterproof Bluetooth speaker with amazing sound",
    },
    Featured {
        id: 5,
        title: "Running Shoes",
        price_cents: 12999,
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500",
        category: "Sports",
        description: "Comfortable running shoes with excellent support",
    },
    Featured {
        id: 6,
        title: "Coffee Maker",
        price_cents: 19999,
        image: "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=500",
        category: "Home",
        description: "Automatic coffee maker with programmable settings",
    },
];

impl Featured {
    fn to_product(&self) -> Product {
        Product::new(self.id, self.title, Money::from_cents(self.price_cents))
            .with_image(self.image)
            .with_category(self.category)
            .with_description(self.description)
    }
}

/// All featured products, in display order.
pub fn featured_products() -> Vec<Product> {
    FEATURED.iter().map(Featured::to_product).collect()
}

/// Look up a featured product. Numeric strings match numeric ids.
pub fn featured_by_id(id: &ProductId) -> Option<Product> {
    let wanted = id.as_number()?;
    FEATURED
        .iter()
        .find(|f| f.id == wanted)
        .map(Featured::to_product)
}

/// Featured products in exactly this category.
pub fn featured_by_category(category: &str) -> Vec<Product> {
    FEATURED
        .iter()
        .filter(|f| f.category == category)
        .map(Featured::to_product)
        .collect()
}
