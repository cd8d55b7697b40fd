use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::OutputMode;
use crate::models::light::Light;

#[derive(Tabled)]
struct LightRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "POWER")]
    power: String,
}

pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }
    let table = Table::new(data).with(Style::rounded()).to_string();
    println!("{}", table);
}

pub fn print_lights(lights: &[Light], mode: OutputMode) {
    match mode {
        OutputMode::Json => print_json(&serde_json::json!(lights)),
        OutputMode::Table => {
            let rows: Vec<LightRow> = lights
                .iter()
                .map(|light| LightRow {
                    id: light.id,
                    name: light.name.clone(),
                    power: light.power_label().to_string(),
                })
                .collect();
            print_table(&rows);
        }
    }
}

pub fn print_error(err: &crate::error::AppError) {
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
    );
}
