use catalog_core::{CatalogViewModel, FormView, OfferFilter, ProductRowView, Severity};

/// Renders the whole view as plain text lines.
pub fn render(view: &CatalogViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(notification) = &view.notification {
        lines.push(format!(
            "[{}] {}",
            severity_label(notification.severity),
            notification.message
        ));
    }

    lines.extend(render_form(&view.form));

    if let Some(lookup) = &view.lookup {
        lines.push(format!(
            "Lookup: {} (updated {})",
            format_row(&lookup.row),
            lookup.updated_label
        ));
    }

    if view.loading {
        lines.push("== Products ==".to_string());
        lines.push("Loading products...".to_string());
    } else if view.products.is_empty() {
        lines.push("== Products ==".to_string());
        lines.push(if view.search.is_empty() {
            "No products saved".to_string()
        } else {
            format!("No products match \"{}\"", view.search)
        });
    } else {
        lines.push(format!("== Products ({}) ==", view.visible_count));
        lines.extend(view.products.iter().map(format_row));
    }

    let mut filters = Vec::new();
    if !view.search.is_empty() {
        filters.push(format!(
            "search \"{}\" ({} of {} shown)",
            view.search, view.visible_count, view.loaded_count
        ));
    }
    if view.offer_filter != OfferFilter::All {
        filters.push(format!("server filter: {}", offer_filter_label(view.offer_filter)));
    }
    if !filters.is_empty() {
        lines.push(format!("Filters: {}", filters.join(", ")));
    }
    if view.total > view.loaded_count as u64 {
        lines.push(format!(
            "Showing the first {} of {} products",
            view.loaded_count, view.total
        ));
    }

    if let Some(id) = view.pending_deletion {
        lines.push(format!(
            "Delete product #{id}? This cannot be undone. Type 'yes' or 'no'."
        ));
    }

    lines
}

fn render_form(form: &FormView) -> Vec<String> {
    let mut lines = vec![
        format!("-- {} --", form.title),
        format!("  name:  {}", form.name),
        format!("  price: {}", form.price),
        format!("  offer: {}", if form.is_offer { "yes" } else { "no" }),
        format!("  ('submit' to {})", form.submit_label.to_lowercase()),
    ];
    if let Some(error) = &form.error {
        lines.push(format!("  ! {error}"));
    }
    lines
}

fn format_row(row: &ProductRowView) -> String {
    let badge = if row.offer { "  [OFFER]" } else { "" };
    format!(
        "#{id:<4} {name:<30} {price:>14}{badge}  created {created}",
        id = row.id,
        name = row.name,
        price = row.price_label,
        badge = badge,
        created = row.created_label
    )
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "ok",
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

fn offer_filter_label(filter: OfferFilter) -> &'static str {
    match filter {
        OfferFilter::All => "all",
        OfferFilter::OffersOnly => "offers only",
        OfferFilter::RegularOnly => "regular only",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{update, CatalogState, Msg, Product, ProductPage};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn product(id: u64, name: &str, price: &str, is_offer: bool) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: Decimal::from_str(price).unwrap(),
            is_offer,
            created_at: "2024-01-01T10:00:00".to_string(),
            updated_at: "2024-01-02T10:00:00".to_string(),
        }
    }

    fn loaded(items: Vec<Product>) -> CatalogState {
        let total = items.len() as u64;
        let (state, _) = update(CatalogState::new(), Msg::ProductsLoaded(ProductPage { total, items }));
        state
    }

    #[test]
    fn empty_catalog_shows_placeholder() {
        let lines = render(&CatalogState::new().view());
        assert!(lines.contains(&"No products saved".to_string()));
        assert!(lines.contains(&"-- Create product --".to_string()));
    }

    #[test]
    fn rows_show_price_and_offer_badge() {
        let state = loaded(vec![
            product(1, "Laptop", "999.99", false),
            product(2, "Mouse", "25", true),
        ]);
        let lines = render(&state.view());

        assert!(lines.contains(&"== Products (2) ==".to_string()));
        let laptop = lines.iter().find(|line| line.contains("Laptop")).unwrap();
        assert!(laptop.contains("999,99 €"));
        assert!(!laptop.contains("[OFFER]"));
        let mouse = lines.iter().find(|line| line.contains("Mouse")).unwrap();
        assert!(mouse.contains("25,00 €"));
        assert!(mouse.contains("[OFFER]"));
        assert!(mouse.contains("created 1/1/2024"));
    }

    #[test]
    fn loading_hides_rows() {
        let state = loaded(vec![product(1, "Laptop", "999.99", false)]);
        let (state, _) = update(state, Msg::LoadRequested);
        let lines = render(&state.view());

        assert!(lines.contains(&"Loading products...".to_string()));
        assert!(!lines.iter().any(|line| line.contains("Laptop")));
    }

    #[test]
    fn pending_deletion_and_notification_are_shown() {
        let (state, _) = update(CatalogState::new(), Msg::DeleteClicked(4));
        let (state, _) = update(state, Msg::EditClicked(9));
        let lines = render(&state.view());

        assert!(lines[0].starts_with("[warning]"));
        assert!(lines.iter().any(|line| line.starts_with("Delete product #4?")));
    }

    #[test]
    fn search_summary_counts_visible_rows() {
        let state = loaded(vec![
            product(1, "Laptop Gaming", "1299.99", true),
            product(2, "Mouse", "25", false),
        ]);
        let (state, _) = update(state, Msg::SearchChanged("LAP".to_string()));
        let lines = render(&state.view());

        assert!(lines.contains(&"== Products (1) ==".to_string()));
        assert!(lines.contains(&"Filters: search \"LAP\" (1 of 2 shown)".to_string()));
    }
}
