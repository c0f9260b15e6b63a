//! Property tests for the route table.
//!
//! These tests verify the invariants a built table must hold:
//! 1. Every pair of definitions has distinct paths and distinct names
//! 2. `lookup(p)` for an exact table returns exactly the route declared at `p`
//! 3. Building never yields a partial table

use ginfinity_core::{Page, View};
use ginfinity_urls::prelude::*;
use proptest::prelude::*;
use rstest::*;
use std::collections::BTreeSet;

fn segment() -> impl Strategy<Value = String> {
	"[a-z][a-z0-9-]{0,8}"
}

fn exact_paths() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop::collection::vec(segment(), 0..3), 1..8).prop_map(|paths| {
		paths
			.into_iter()
			.map(|segments| format!("/{}", segments.join("/")))
			.collect()
	})
}

fn build(paths: &[String], names: &[String]) -> Result<RouteTable, RouteTableError> {
	paths
		.iter()
		.zip(names)
		.fold(RouteTable::builder(), |builder, (path, name)| {
			builder.route(
				path.clone(),
				name.clone(),
				View::new("PropertyView", Page::empty),
				RouteMeta::new(),
			)
		})
		.build()
}

#[rstest]
fn test_route_table_uniqueness_property() {
	proptest!(|(paths in exact_paths())| {
		let names: Vec<String> = (0..paths.len()).map(|i| format!("route-{}", i)).collect();
		let distinct: BTreeSet<&String> = paths.iter().collect();

		match build(&paths, &names) {
			Ok(table) => {
				prop_assert_eq!(distinct.len(), paths.len());
				let routes: Vec<_> = table.iter().collect();
				for (i, a) in routes.iter().enumerate() {
					for b in &routes[i + 1..] {
						prop_assert_ne!(a.path(), b.path());
						prop_assert_ne!(a.name(), b.name());
					}
				}
			}
			Err(err) => {
				prop_assert!(distinct.len() < paths.len());
				let is_duplicate_path = matches!(err, RouteTableError::DuplicatePath { .. });
				prop_assert!(is_duplicate_path);
			}
		}
	});
}

#[rstest]
fn test_lookup_returns_declared_route_property() {
	proptest!(|(paths in exact_paths(), candidate in prop::collection::vec(segment(), 0..3))| {
		let paths: Vec<String> = paths.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
		let names: Vec<String> = (0..paths.len()).map(|i| format!("route-{}", i)).collect();
		let table = build(&paths, &names).unwrap();

		for (path, name) in paths.iter().zip(&names) {
			let matched = table.lookup(path).unwrap();
			prop_assert_eq!(matched.route.name(), name.as_str());
		}

		let candidate = format!("/{}", candidate.join("/"));
		match table.lookup(&candidate) {
			Some(matched) => prop_assert_eq!(matched.route.path(), candidate.as_str()),
			None => prop_assert!(!paths.contains(&candidate)),
		}
	});
}

#[rstest]
fn test_duplicate_name_never_builds_property() {
	proptest!(|(paths in exact_paths(), clash in 0usize..8)| {
		let paths: Vec<String> = paths.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
		prop_assume!(paths.len() >= 2);

		let mut names: Vec<String> = (0..paths.len()).map(|i| format!("route-{}", i)).collect();
		let target = 1 + clash % (paths.len() - 1);
		names[target] = names[0].clone();

		let is_duplicate_name = matches!(
			build(&paths, &names),
			Err(RouteTableError::DuplicateName { .. })
		);
		prop_assert!(is_duplicate_name);
	});
}
