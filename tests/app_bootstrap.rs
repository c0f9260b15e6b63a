//! Integration tests for application bootstrap:
//! 1. Startup resolves the initial location with the configured settings
//! 2. Fatal construction errors abort startup
//! 3. Full navigation across the application routes

use ginfinity::conf::{DevProxySettings, Settings};
use ginfinity::pages::router::{BasePath, Document, MemoryDocument, MemoryHistory, MemoryOutlet};
use ginfinity::{LaunchError, Page, RouteMeta, RouteStatus, RouteTable, RouteTableError, View};
use rstest::*;

struct Host {
	history: MemoryHistory,
	document: MemoryDocument,
	outlet: MemoryOutlet,
}

#[fixture]
fn host() -> Host {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	Host {
		history: MemoryHistory::new("/"),
		document: MemoryDocument::new(),
		outlet: MemoryOutlet::new(),
	}
}

fn launch(settings: &Settings, host: &Host) -> Result<ginfinity::Router, LaunchError> {
	ginfinity::launch(
		settings,
		host.history.clone(),
		host.document.clone(),
		host.outlet.clone(),
	)
}

#[rstest]
fn test_launch_resolves_initial_location(host: Host) {
	let router = launch(&Settings::default(), &host).unwrap();

	assert!(router.is_resolved());
	assert_eq!(router.current_route_name(), Some("home"));
	assert_eq!(host.document.title(), "Home");
	assert_eq!(host.history.entries(), ["/"]);
	assert_eq!(
		host.outlet.html(),
		"<section id=\"home\"><h1>Ginfinity</h1></section>"
	);
}

#[rstest]
#[case("/", "home", "Home")]
#[case("/comparar-arn", "comparador-arn", "Comparar ARN")]
#[case("/embedding-arn", "embedding-arn", "Embedding ARN")]
#[case("/calcular-embeddings", "calcular-embeddings", "Calcular Embeddings")]
fn test_every_route_syncs_title(
	host: Host,
	#[case] path: &str,
	#[case] name: &str,
	#[case] title: &str,
) {
	let mut router = launch(&Settings::default(), &host).unwrap();

	assert_eq!(router.navigate(path), RouteStatus::Resolved);
	assert_eq!(router.current_route_name(), Some(name));
	assert_eq!(host.document.title(), title);
}

#[rstest]
fn test_launch_under_base_url(host: Host) {
	let settings = Settings {
		base_url: "/ginfinity/".to_string(),
		..Settings::default()
	};
	let history = MemoryHistory::new("/ginfinity/calcular-embeddings");
	let host = Host { history, ..host };

	let mut router = launch(&settings, &host).unwrap();
	assert_eq!(router.current_route_name(), Some("calcular-embeddings"));

	router.navigate("comparador-arn");
	assert_eq!(host.history.location(), "/ginfinity/comparar-arn");
}

#[rstest]
fn test_unknown_start_location_shows_not_found_view(host: Host) {
	let host = Host {
		history: MemoryHistory::new("/compare"),
		..host
	};
	let settings = Settings {
		not_found_title: "Página no encontrada".to_string(),
		..Settings::default()
	};

	let router = launch(&settings, &host).unwrap();

	assert!(!router.is_resolved());
	assert_eq!(host.document.title(), "Página no encontrada");
	assert!(host.outlet.html().contains("Volver al inicio"));
}

#[rstest]
fn test_not_found_home_link_follows_base_url(host: Host) {
	let host = Host {
		history: MemoryHistory::new("/ginfinity/perdido"),
		..host
	};
	let settings = Settings {
		base_url: "/ginfinity/".to_string(),
		..Settings::default()
	};

	let mut router = launch(&settings, &host).unwrap();
	let html = host.outlet.html();
	assert!(html.contains("href=\"/ginfinity/\""), "{}", html);

	let path = BasePath::new(&settings.base_url)
		.strip("/ginfinity/")
		.map(|path| path.into_owned())
		.unwrap();
	router.navigate(path);

	assert_eq!(router.current_route_name(), Some("home"));
	assert_eq!(host.history.location(), "/ginfinity/");
}

#[rstest]
fn test_untitled_route_uses_app_name(host: Host) {
	let routes = RouteTable::builder()
		.route("/", "home", View::new("HomeView", Page::empty), RouteMeta::new())
		.build()
		.unwrap();
	let settings = Settings {
		app_name: "Ginfinity ARN".to_string(),
		..Settings::default()
	};

	ginfinity::launch_with_routes(
		&settings,
		routes,
		host.history.clone(),
		host.document.clone(),
		host.outlet.clone(),
	)
	.unwrap();

	assert_eq!(host.document.title(), "Ginfinity ARN");
}

#[rstest]
fn test_duplicate_route_aborts_launch(host: Host) {
	let routes = RouteTable::builder()
		.route("/", "home", View::new("A", Page::empty), RouteMeta::new())
		.route("/", "inicio", View::new("B", Page::empty), RouteMeta::new())
		.build();

	let err = routes.unwrap_err();
	assert!(matches!(err, RouteTableError::DuplicatePath { .. }));

	let launch_err = LaunchError::from(err);
	assert!(launch_err.to_string().starts_with("Invalid route table"));
	assert_eq!(host.outlet.mount_count(), 0);
}

#[rstest]
fn test_invalid_settings_abort_launch(host: Host) {
	let settings = Settings {
		dev_proxy: DevProxySettings {
			prefixes: vec!["tsv_embed".to_string()],
			..DevProxySettings::default()
		},
		..Settings::default()
	};

	let result = launch(&settings, &host);

	assert!(matches!(result, Err(LaunchError::Settings(_))));
	assert_eq!(host.outlet.mount_count(), 0);
	assert_eq!(host.document.title(), "");
}
