use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub price: f64,
    pub image: &'static str,
}

impl Service {
    /// Price as shown on the service cards, e.g. `$85` or `$42.50`.
    pub fn display_price(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${:.2}", self.price)
        }
    }
}

pub static SERVICES: [Service; 6] = [
    Service {
        id: "svc_01",
        name: "Signature Haircut",
        description: "A tailored haircut experience including a wash, cut, and style.",
        duration_minutes: 60,
        price: 85.0,
        image: "https://images.unsplash.com/photo-1599331834183-2c35a5d87f89?q=80&w=1974&auto=format&fit=crop",
    },
    Service {
        id: "svc_02",
        name: "Luminous Balayage",
        description: "Hand-painted highlights for a natural, sun-kissed look.",
        duration_minutes: 180,
        price: 250.0,
        image: "https://images.unsplash.com/photo-1632345031435-8727f6897f53?q=80&w=1974&auto=format&fit=crop",
    },
    Service {
        id: "svc_03",
        name: "Deep Conditioning Treatment",
        description: "An intensive treatment to restore moisture and shine to your hair.",
        duration_minutes: 45,
        price: 60.0,
        image: "https://images.unsplash.com/photo-1560243563-062da202a57c?q=80&w=1974&auto=format&fit=crop",
    },
    Service {
        id: "svc_04",
        name: "Elegant Updo",
        description: "A beautiful hairstyle for special occasions, from weddings to galas.",
        duration_minutes: 75,
        price: 120.0,
        image: "https://images.unsplash.com/photo-1616099397099-f277157e4a93?q=80&w=1974&auto=format&fit=crop",
    },
    Service {
        id: "svc_05",
        name: "Gloss & Tone",
        description: "Refresh your color and add brilliant shine with a custom gloss.",
        duration_minutes: 90,
        price: 150.0,
        image: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?q=80&w=2070&auto=format&fit=crop",
    },
    Service {
        id: "svc_06",
        name: "Luxury Manicure",
        description: "A pampering manicure including shaping, cuticle care, massage, and polish.",
        duration_minutes: 50,
        price: 55.0,
        image: "https://images.unsplash.com/photo-1604654894610-df63bc536374?q=80&w=2070&auto=format&fit=crop",
    },
];

/// All bookable services in declaration order.
pub fn catalog() -> &'static [Service] {
    &SERVICES
}

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}
