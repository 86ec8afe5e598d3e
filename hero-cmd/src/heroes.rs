//! Catalog listing.

use hero_core::HeroCatalog;

/// Stock hero names, in display order.
pub fn list_heroes() -> Vec<String> {
    HeroCatalog::builtin().iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::list_heroes;

    #[test]
    fn test_list_heroes() {
        let heroes = list_heroes();
        assert_eq!(heroes.len(), 87);
        assert_eq!(heroes[0], "IronMan");
    }
}
