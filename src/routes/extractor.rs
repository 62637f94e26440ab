//! Route extraction from controller methods.
//!
//! Each route-defining annotation on a method yields one record:
//!   @GetMapping("/profile")                                  -> GET
//!   @PostMapping(value = "/join")                            -> POST
//!   @RequestMapping(value = "/x", method = RequestMethod.PUT) -> PUT
//!   @RequestMapping("/x")                                    -> ALL

use tracing::debug;

use super::annotation::{extract_value, named_argument};
use super::classifier::{base_url, is_controller, REQUEST_MAPPING};
use super::describe::describe;
use super::types::{Annotation, ClassDeclaration, HttpVerb, MethodDeclaration, RouteRecord};

/// Verb-specific mapping annotations.
const VERB_MAPPINGS: [(&str, HttpVerb); 4] = [
    ("GetMapping", HttpVerb::Get),
    ("PostMapping", HttpVerb::Post),
    ("PutMapping", HttpVerb::Put),
    ("DeleteMapping", HttpVerb::Delete),
];

/// All routes declared by `class`, or none if it is not a controller.
pub fn extract_class_routes(class: &ClassDeclaration) -> Vec<RouteRecord> {
    if !is_controller(class) {
        return Vec::new();
    }

    let base = base_url(class);
    let routes: Vec<RouteRecord> = class
        .methods
        .iter()
        .flat_map(|method| extract_routes(method, &base))
        .collect();

    debug!(class = %class.name, base = %base, routes = routes.len(), "controller");
    routes
}

/// One record per route-defining annotation on `method`, in annotation order.
pub fn extract_routes(method: &MethodDeclaration, base_url: &str) -> Vec<RouteRecord> {
    method
        .annotations
        .iter()
        .filter_map(|ann| {
            let verb = route_verb(ann)?;
            let path = compose_path(base_url, &extract_value(ann, "value"));

            Some(RouteRecord {
                class_name: method.enclosing_class.clone().unwrap_or_default(),
                method_name: method.name.clone(),
                verb,
                path,
                description: describe(method),
            })
        })
        .collect()
}

/// Verb of a route-defining annotation; `None` for any other annotation.
fn route_verb(annotation: &Annotation) -> Option<HttpVerb> {
    if annotation.name == REQUEST_MAPPING {
        return Some(infer_verb(named_argument(annotation, "method")));
    }

    VERB_MAPPINGS
        .iter()
        .find(|(name, _)| *name == annotation.name)
        .map(|(_, verb)| *verb)
}

/// Verb of a generic mapping from the raw text of its `method` argument.
///
/// Case-sensitive substring search for GET, POST, PUT, DELETE in that
/// order; the first hit wins even if the text names several verbs. No hit,
/// or no argument, means [`HttpVerb::All`].
pub fn infer_verb(method_arg: Option<&str>) -> HttpVerb {
    let Some(raw) = method_arg else {
        return HttpVerb::All;
    };

    [
        ("GET", HttpVerb::Get),
        ("POST", HttpVerb::Post),
        ("PUT", HttpVerb::Put),
        ("DELETE", HttpVerb::Delete),
    ]
    .into_iter()
    .find(|(token, _)| raw.contains(token))
    .map_or(HttpVerb::All, |(_, verb)| verb)
}

/// Join `base` and `path` and give the result exactly one added leading `/`.
///
/// Only one leading `/` of the joined string is dropped before the new one
/// is added, so `"/api/" + "/users"` stays `"/api//users"`.
pub fn compose_path(base: &str, path: &str) -> String {
    let joined = format!("{base}{path}");
    let rest = joined.strip_prefix('/').unwrap_or(&joined);
    format!("/{rest}")
}
