use crate::config::AppConfig;
use crate::models::{catalog, Service};

static HOME_TEMPLATE: &str = include_str!("../web/home.html");

pub const HERO_TITLE: &str = "Experience Serenity, Embrace Beauty";

/// Renders the marketing page: hero, one card per service, the booking dialog
/// mount point and the footer.
pub fn render_home_page(config: &AppConfig, year: i32) -> String {
    let cards: String = catalog().iter().map(service_card).collect();
    let hero_service = catalog().first().map(|s| s.id).unwrap_or_default();

    HOME_TEMPLATE
        .replace("{{HERO_TITLE}}", HERO_TITLE)
        .replace("{{HERO_SERVICE_ID}}", hero_service)
        .replace("{{SERVICE_CARDS}}", &cards)
        .replace("{{BUSINESS_NAME}}", &escape_html(&config.business_name))
        .replace("{{BUSINESS_ADDRESS}}", &escape_html(&config.business_address))
        .replace("{{YEAR}}", &year.to_string())
}

fn service_card(service: &Service) -> String {
    format!(
        r#"
        <article class="card" data-service-id="{id}">
          <img src="{image}" alt="{name}" loading="lazy">
          <div class="card-body">
            <h3>{name}</h3>
            <p class="price">{price}</p>
            <p class="description">{description}</p>
            <p class="duration">{duration} min</p>
          </div>
          <button class="book" data-service-id="{id}">Book Now</button>
        </article>"#,
        id = escape_html(service.id),
        image = escape_html(service.image),
        name = escape_html(service.name),
        price = escape_html(&service.display_price()),
        description = escape_html(service.description),
        duration = service.duration_minutes,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
