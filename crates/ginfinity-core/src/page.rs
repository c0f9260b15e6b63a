//! Page types for view rendering.
//!
//! A [`Page`] is the renderable output of a view: a small tree of elements
//! and text nodes that an outlet mounts into the host document.
//!
//! ## Example
//!
//! ```
//! use ginfinity_core::page::{IntoPage, Page, PageElement};
//!
//! let page = PageElement::new("h1")
//! 	.attr("class", "title")
//! 	.child("Comparar ARN")
//! 	.into_page();
//!
//! assert_eq!(page.render_to_string(), "<h1 class=\"title\">Comparar ARN</h1>");
//! ```

mod util;

pub(crate) use util::html_escape;

use std::borrow::Cow;

/// A renderable tree produced by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple pages (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty page (renders nothing).
	Empty,
}

/// Represents a DOM element in the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	is_void: bool,
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child page.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child pages.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in declaration order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child pages.
	pub fn child_pages(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element (no closing tag).
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl Page {
	/// Creates a text page.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(text.into())
	}

	/// Creates an empty page.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns whether this page renders nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			Page::Empty => true,
			Page::Fragment(children) => children.iter().all(Page::is_empty),
			_ => false,
		}
	}

	/// Renders the page to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_pages() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Conversion into a [`Page`].
pub trait IntoPage {
	/// Converts `self` into a page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(IntoPage::into_page).collect())
	}
}
