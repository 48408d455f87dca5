use crate::models::{Service, UnitPrice};

static SERVICES: [Service; 6] = [
    Service {
        id: "boat-tour",
        display_name: "Boat Tour",
        unit_price: UnitPrice::Fixed(800),
    },
    Service {
        id: "jet-ski",
        display_name: "Jet Ski Rental",
        unit_price: UnitPrice::Fixed(200),
    },
    Service {
        id: "fishing",
        display_name: "Sport Fishing",
        unit_price: UnitPrice::Fixed(600),
    },
    Service {
        id: "catamaran",
        display_name: "Luxury Catamaran",
        unit_price: UnitPrice::Fixed(1500),
    },
    Service {
        id: "photography",
        display_name: "Professional Photography",
        unit_price: UnitPrice::Fixed(300),
    },
    Service {
        id: "event",
        display_name: "Special Event",
        unit_price: UnitPrice::QuoteRequired,
    },
];

pub fn list_services() -> &'static [Service] {
    &SERVICES
}

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<&str> = list_services().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["boat-tour", "jet-ski", "fishing", "catamaran", "photography", "event"]
        );
    }

    #[test]
    fn test_find_service() {
        let jet_ski = find_service("jet-ski").unwrap();
        assert_eq!(jet_ski.display_name, "Jet Ski Rental");
        assert_eq!(jet_ski.unit_price, UnitPrice::Fixed(200));
        assert_eq!(
            find_service("event").unwrap().unit_price,
            UnitPrice::QuoteRequired
        );
    }

    #[test]
    fn test_find_service_unknown() {
        assert!(find_service("submarine").is_none());
        assert!(find_service("").is_none());
        assert!(find_service("Jet-Ski").is_none());
    }
}
