//! Order Export Example - 从持久化行到导出表格
//!
//! 这个示例展示导出引擎的完整流程:
//! 1. 反序列化一条持久化订单行 (products 列为遗留 JSON 字符串)
//! 2. 行项目归一化、分组、级联折扣
//! 3. 构建导出表格并打印单元格
//!
//! 运行: cargo run -p export-engine --example order_export

use std::collections::HashMap;

use export_engine::core::ExportConfig;
use export_engine::export::build_order_sheet;
use shared::models::{Order, ProductDetails};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Order Export Example ===\n");

    // === 1. A persisted order row, warts and all ===
    let mut order: Order = serde_json::from_str(
        r#"{
            "customer_name": "Toko Terang Abadi",
            "products": "[{\"produk_id\": 1, \"warna_id\": 0, \"quantity\": 10, \"price\": 45000}, {\"produk_id\": 1, \"warna_id\": 0, \"quantity\": 5, \"price\": 45000}, {\"produk_id\": 2, \"warna_id\": \"6500K\", \"quantity\": 4, \"price\": 120000}]",
            "diskons_enabled": true,
            "diskon_1": 10,
            "penjelasan_diskon_1": "Program semester",
            "diskon_2": 2.5,
            "payment_method": "tempo",
            "status_pembayaran": "belum bayar",
            "status_order": "confirmed",
            "delivery_images": ["storage/delivery/d1.jpg", "storage/delivery/d2.jpg"]
        }"#,
    )?;
    order.ensure_defaults();
    export_engine::validate_order(&order)?;

    // === 2. Catalog snapshot (resolved upstream by the storage layer) ===
    let mut catalog = HashMap::new();
    catalog.insert(
        1,
        ProductDetails {
            brand_name: Some("Nanolite".to_string()),
            category_name: Some("Downlight".to_string()),
            product_name: Some("DL-9W".to_string()),
            barcode: Some("8990000000019".to_string()),
            colors: vec!["3000K".to_string(), "6500K".to_string()],
            ..Default::default()
        },
    );
    catalog.insert(
        2,
        ProductDetails {
            brand_name: Some("Nanopanel".to_string()),
            category_name: Some("Panel".to_string()),
            product_name: Some("PNL-18W".to_string()),
            barcode: Some("8990000000026".to_string()),
            colors: vec!["6500K".to_string()],
            ..Default::default()
        },
    );

    // === 3. Build and print the sheet ===
    let cfg = ExportConfig::from_env();
    let sheet = build_order_sheet(&order, &catalog, &cfg);

    println!("{} ({} columns)\n", sheet.title, sheet.column_count());
    for row in &sheet.rows {
        let line: Vec<&str> = row.iter().map(String::as_str).filter(|c| !c.is_empty()).collect();
        if !line.is_empty() {
            println!("{}", line.join(" | "));
        }
    }
    for anchor in &sheet.evidence {
        println!("\nevidence at row {}, col {}: {:?}", anchor.row, anchor.column, anchor.paths);
    }

    Ok(())
}
