//! Product retrieval by id.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::fixtures::load_catalog;
use crate::render::{category_cell, user_cell, write_json, RenderOptions};

pub fn run_get(config: &Config, id: i64, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let product = match catalog.get(id) {
        Some(p) => p,
        None => bail!("product not found: {}", id),
    };

    if json {
        return write_json(&mut std::io::stdout().lock(), product);
    }

    let opts = RenderOptions::from_config(config);
    println!("ID:        {}", product.id);
    println!("Product:   {}", product.name);
    println!("Category:  {}", category_cell(product));
    println!("User:      {}", user_cell(product, opts.color));
    if let Some(sex) = product.user_sex {
        println!("Sex:       {}", sex);
    }
    Ok(())
}
