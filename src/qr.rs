use qrcode::{render::svg, QrCode};

/// Inline `<svg>` element encoding `data`, without the XML prolog so it can
/// be dropped straight into an HTML page.
pub fn svg(data: &str) -> anyhow::Result<String> {
	let image = QrCode::new(data.as_bytes())?
		.render::<svg::Color>()
		.min_dimensions(200, 200)
		.build();

	Ok(match image.find("<svg") {
		Some(start) => image[start..].to_string(),
		None => image,
	})
}
