//! Terminal rendering for the storefront commands.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use vitrine_commerce::catalog::Product;

/// Shelf columns: id, name, price, installments.
const SHELF_WIDTHS: [usize; 4] = [4, 28, 12, 22];

/// Console output, silenced for human-readable lines when `--json` is set.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn info(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    pub fn success(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are still reported in JSON mode, as `{"error": ...}` on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Print the shelf as a table of product cards.
    pub fn shelf(&self, products: &[Product]) {
        if self.json {
            return;
        }
        println!(
            "  {}",
            style(pad_columns(["ID", "NAME", "PRICE", "INSTALLMENTS"])).bold()
        );
        for product in products {
            println!("  {}", shelf_row(product));
        }
    }

    /// Print one mini-cart line.
    pub fn cart_item(&self, product: &Product) {
        if !self.json {
            println!(
                "  {} {}  {}  {}",
                style("•").dim(),
                style(&product.id).dim(),
                product.name,
                product.price_label()
            );
        }
    }

    /// Print a facet or sort option with its checkbox.
    pub fn option(&self, selected: bool, label: &str, detail: &str) {
        if self.json {
            return;
        }
        let mark = if selected {
            style("[x]").green()
        } else {
            style("[ ]").dim()
        };
        println!("  {} {} ({})", mark, label, detail);
    }

    /// Spinner shown while the catalog loads. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

fn shelf_row(product: &Product) -> String {
    pad_columns([
        product.id.as_str(),
        &product.name,
        &product.price_label(),
        &product.installment.label(),
    ])
}

/// Pad each column to its shelf width, cutting names that overflow it.
fn pad_columns(cols: [&str; 4]) -> String {
    cols.iter()
        .zip(SHELF_WIDTHS)
        .map(|(col, width)| {
            let cell = if col.chars().count() > width {
                let mut cut: String = col.chars().take(width.saturating_sub(1)).collect();
                cut.push('…');
                cut
            } else {
                col.to_string()
            };
            format!("{:width$}", cell, width = width)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
