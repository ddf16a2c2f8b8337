//! Product table filter editing.

use crate::products::{ProductRow, table_rows};

use super::super::app::App;

pub struct ProductsHandler<'a> {
    app: &'a mut App,
}

impl<'a> ProductsHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn push_char(&mut self, c: char) {
        self.app.filter.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.app.filter.text.pop();
    }

    pub fn clear(&mut self) {
        self.app.filter.text.clear();
    }

    pub fn toggle_in_stock(&mut self) {
        self.app.filter.in_stock_only = !self.app.filter.in_stock_only;
        let shown = table_rows(&self.app.catalog, &self.app.filter)
            .iter()
            .filter(|r| matches!(r, ProductRow::Item(_)))
            .count();
        self.app.log(format!(
            "In-stock only {} ({} products shown)",
            if self.app.filter.in_stock_only {
                "on"
            } else {
                "off"
            },
            shown
        ));
    }
}
