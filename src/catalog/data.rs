//! Hardcoded demo product tables.

use super::Product;

pub(super) const LAPTOPS: &[Product] = &[
    Product {
        id: "macbook-pro",
        title: "MacBook Pro 16\"",
        spec: "M3 Pro • 16GB RAM • 512GB SSD",
        price: 2_499,
        image_url: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "dell-xps",
        title: "Dell XPS 15",
        spec: "i7 • 16GB RAM • 512GB SSD",
        price: 1_899,
        image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "hp-spectre",
        title: "HP Spectre x360",
        spec: "i5 • 8GB RAM • 256GB SSD",
        price: 1_299,
        image_url: "https://images.unsplash.com/photo-1587831990711-23ca6441447b?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "lenovo-thinkpad",
        title: "Lenovo ThinkPad X1",
        spec: "i7 • 32GB RAM • 1TB SSD",
        price: 2_199,
        image_url: "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "asus-zenbook",
        title: "ASUS ZenBook 14",
        spec: "Ryzen 7 • 16GB RAM • 512GB SSD",
        price: 1_599,
        image_url: "https://images.unsplash.com/photo-1603302576837-37561b2e2302?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "surface-laptop",
        title: "Surface Laptop 5",
        spec: "i5 • 8GB RAM • 256GB SSD",
        price: 1_199,
        image_url: "https://images.unsplash.com/photo-1525547719571-a2d4ac8945e2?w=300&h=200&fit=crop&crop=center",
    },
];

pub(super) const SMARTPHONES: &[Product] = &[
    Product {
        id: "iphone-15-pro",
        title: "iPhone 15 Pro",
        spec: "A17 Pro • 128GB • Titanium",
        price: 999,
        image_url: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "samsung-s24",
        title: "Samsung Galaxy S24",
        spec: "Snapdragon 8 Gen 3 • 256GB",
        price: 899,
        image_url: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "pixel-8-pro",
        title: "Google Pixel 8 Pro",
        spec: "Tensor G3 • 128GB • 5G",
        price: 799,
        image_url: "https://images.unsplash.com/photo-1510557880182-3d4d3cba35a5?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "oneplus-12",
        title: "OnePlus 12",
        spec: "Snapdragon 8 Gen 3 • 256GB",
        price: 699,
        image_url: "https://images.unsplash.com/photo-1601972602288-1f5d7b0b8b8b?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "xiaomi-14",
        title: "Xiaomi 14",
        spec: "Snapdragon 8 Gen 3 • 256GB",
        price: 599,
        image_url: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "nothing-phone-2",
        title: "Nothing Phone (2)",
        spec: "Snapdragon 8+ Gen 1 • 256GB",
        price: 549,
        image_url: "https://images.unsplash.com/photo-1601972602288-1f5d7b0b8b8b?w=300&h=200&fit=crop&crop=center",
    },
];

pub(super) const TVS: &[Product] = &[
    Product {
        id: "samsung-qled-65",
        title: "Samsung QLED 65\"",
        spec: "4K • HDR10+ • Smart TV",
        price: 1_299,
        image_url: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "lg-oled-55",
        title: "LG OLED 55\"",
        spec: "4K • OLED • Smart TV",
        price: 1_599,
        image_url: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "sony-bravia-75",
        title: "Sony Bravia 75\"",
        spec: "4K • HDR • Smart TV",
        price: 2_199,
        image_url: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "tcl-roku-50",
        title: "TCL Roku 50\"",
        spec: "4K • Roku OS • Smart TV",
        price: 399,
        image_url: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "hisense-uled-65",
        title: "Hisense ULED 65\"",
        spec: "4K • ULED • Smart TV",
        price: 799,
        image_url: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "vizio-m-series-55",
        title: "Vizio M-Series 55\"",
        spec: "4K • HDR • Smart TV",
        price: 599,
        image_url: "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=300&h=200&fit=crop&crop=center",
    },
];

pub(super) const APPLIANCES: &[Product] = &[
    Product {
        id: "dyson-v15",
        title: "Dyson V15 Detect",
        spec: "Cordless • Laser Detection • 60min",
        price: 699,
        image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "kitchenaid-mixer",
        title: "KitchenAid Stand Mixer",
        spec: "5 Quart • 10 Speeds • Tilt-Head",
        price: 399,
        image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "instant-pot-duo",
        title: "Instant Pot Duo",
        spec: "7-in-1 • 6 Quart • Pressure Cooker",
        price: 99,
        image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "ninja-blender",
        title: "Ninja Professional Blender",
        spec: "1000W • 72oz Pitcher • 4 Blades",
        price: 79,
        image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "breville-espresso",
        title: "Breville Espresso Machine",
        spec: "15 Bar • Milk Frother • 54mm Portafilter",
        price: 599,
        image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=300&h=200&fit=crop&crop=center",
    },
    Product {
        id: "air-fryer-xl",
        title: "Ninja Air Fryer XL",
        spec: "5.5 Quart • 4 Functions • 1750W",
        price: 129,
        image_url: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=300&h=200&fit=crop&crop=center",
    },
];
