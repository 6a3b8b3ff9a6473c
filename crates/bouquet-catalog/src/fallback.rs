//! Built-in catalog served when the configured source cannot be read

use bouquet_core::Product;

fn item(id: &str, name: &str, price: f64, category: &str, stock: i64, seed: &str) -> Product {
    let mut product = Product::new(id, name)
        .with_price(price)
        .with_category(category)
        .with_stock(stock);
    product.image_url = format!("https://picsum.photos/seed/{}/300/300", seed);
    product
}

pub fn fallback_products() -> Vec<Product> {
    vec![
        item("rose-red", "Red Rose", 100.0, "Single", 50, "rose-red"),
        item("rose-pink", "Baby Pink Rose", 100.0, "Single", 45, "rose-pink"),
        item("rose-white", "White Rose", 100.0, "Single", 30, "rose-white"),
        item("carn-pink", "Baby Pink Carnation", 100.0, "Single", 40, "carn-pink"),
        item("carn-purple", "Purple Carnation", 100.0, "Single", 25, "carn-purp"),
        item("carn-pomelo", "Pomelo Carnation", 100.0, "Single", 20, "carn-pom"),
        item("tulip-pink", "Pink Tulip", 250.0, "Single", 15, "tulip-pink"),
        item("tulip-yellow", "Yellow Tulip", 250.0, "Single", 15, "tulip-yell"),
        item("bouq-mixed", "Red, White, Pink Roses Bouquet", 300.0, "Bouquet", 10, "bouq-mix")
            .with_bundle("rose-red, rose-white, rose-pink, foil-red/foil-purple"),
        item("bouq-tulip", "2 Pink Tulips & 1 Yellow Tulip Bouquet", 700.0, "Bouquet", 5, "bouq-tul"),
        item("bouq-carn", "Baby Pink, Purple, Pomelo Carnations Bouquet", 300.0, "Bouquet", 8, "bouq-carn"),
        item("foil-purple", "Purple Foiled Rose", 150.0, "Single", 100, "foil-purp"),
        item("foil-red", "Red Foiled Rose", 150.0, "Single", 100, "foil-red"),
        item("lego-red", "Red Lego Flower", 120.0, "Add-on", 20, "lego-red"),
        item("lego-pink", "Pink Lego Flower", 120.0, "Add-on", 20, "lego-pink"),
        item("lego-blue", "Blue Lego Flower", 120.0, "Add-on", 20, "lego-blue"),
        item("crochet-rose-red", "Red Rose Crochet Flower", 250.0, "Crochet", 10, "cro-red"),
        item("crochet-rose-pink", "Pink Rose Crochet Flower", 250.0, "Crochet", 10, "cro-pink"),
        item("bracelet-yy", "Yin and Yang Friendship Bracelet", 200.0, "Jewelry", 50, "brace-yy"),
        item("bracelet-sm", "Sun and Moon Friendship Bracelet", 200.0, "Jewelry", 50, "brace-sm"),
        item("bundle-roses", "Roses Bundle", 600.0, "Bundle", 10, "bund-rose").with_bundle(
            r#"rose-red/rose-pink/rose-white, bouq-mixed/bouq-carn, bracelet-yy/bracelet-sm, "Happy Valentine's"/"Thinking of You""#,
        ),
        item("bundle-tulips", "Tulips Bundle", 1000.0, "Bundle", 10, "bund-tul")
            .with_bundle("bouq-tulip, lego-red/lego-pink/lego-blue, sunglasses"),
        item("sunglasses", "Rose Tinted Sunglasses", 200.0, "Add-on", 15, "glasses"),
    ]
}
