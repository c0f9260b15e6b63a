//! Application views.
//!
//! The views own no navigation logic; they only give the route table
//! something to mount. Content is rendered by the presentation layer.

use ginfinity_core::{IntoPage, Page, PageElement, View};
use ginfinity_pages::router::BasePath;

fn section(id: &'static str, heading: &'static str) -> Page {
	PageElement::new("section")
		.attr("id", id)
		.child(PageElement::new("h1").child(heading))
		.into_page()
}

/// Landing page.
pub fn home() -> View {
	View::new("HomeView", || section("home", "Ginfinity"))
}

/// RNA sequence comparison.
pub fn comparador_arn() -> View {
	View::new("ComparadorARN", || section("comparador-arn", "Comparar ARN"))
}

/// RNA embedding lookup.
pub fn embedding_arn() -> View {
	View::new("EmbeddingARN", || section("embedding-arn", "Embedding ARN"))
}

/// Batch embedding computation from TSV uploads.
pub fn calcular_embeddings() -> View {
	View::new("CalcularEmbeddings", || {
		section("calcular-embeddings", "Calcular Embeddings")
	})
}

/// Shown while no route matches.
///
/// The home link carries `data-link`, so the browser click listener routes
/// it through the router instead of reloading the page.
pub fn not_found(base: &BasePath) -> View {
	let home = base.join("/");
	View::new("NotFoundView", move || {
		PageElement::new("section")
			.attr("id", "not-found")
			.child(PageElement::new("h1").child("Página no encontrada"))
			.child(
				PageElement::new("a")
					.attr("href", home.clone())
					.attr("data-link", "true")
					.child("Volver al inicio"),
			)
			.into_page()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(home(), "HomeView", "<section id=\"home\"><h1>Ginfinity</h1></section>")]
	#[case(
		comparador_arn(),
		"ComparadorARN",
		"<section id=\"comparador-arn\"><h1>Comparar ARN</h1></section>"
	)]
	fn test_view_render(#[case] view: View, #[case] name: &str, #[case] html: &str) {
		assert_eq!(view.name(), name);
		assert_eq!(view.render().render_to_string(), html);
	}

	#[rstest]
	#[case("/", "href=\"/\"")]
	#[case("/ginfinity/", "href=\"/ginfinity/\"")]
	fn test_not_found_links_home_under_base(#[case] base: &str, #[case] href: &str) {
		let html = not_found(&BasePath::new(base)).render().render_to_string();
		assert!(html.contains(href), "{}", html);
		assert!(html.contains("data-link"));
	}
}
