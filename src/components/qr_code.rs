use leptos::prelude::*;

/// Inline SVG QR code for a payment request shown in an expanded invoice
/// row. Renders nothing for an empty string.
#[component]
pub fn QrCode(
    #[prop(into)] data: Signal<String>,
    #[prop(default = 180)] size: u32,
) -> impl IntoView {
    let svg = move || render_svg(&data.get(), size);

    view! { <div class="qr-code" inner_html=svg /> }
}

fn render_svg(data: &str, size: u32) -> String {
    if data.is_empty() {
        return String::new();
    }

    // Payment requests are case-insensitive; uppercase fits alphanumeric mode
    match qrcode::QrCode::new(data.to_uppercase().as_bytes()) {
        Ok(code) => code
            .render::<qrcode::render::svg::Color>()
            .min_dimensions(size, size)
            .dark_color(qrcode::render::svg::Color("#000000"))
            .light_color(qrcode::render::svg::Color("#ffffff"))
            .quiet_zone(true)
            .build(),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to encode QR code");
            String::from("<p class=\"error-message\">Failed to generate QR code</p>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render_svg;

    #[test]
    fn empty_data_renders_nothing() {
        assert!(render_svg("", 100).is_empty());
    }

    #[test]
    fn payment_request_renders_svg() {
        let svg = render_svg("lnbc10u1pjexample", 100);
        assert!(svg.contains("<svg"));
    }
}
