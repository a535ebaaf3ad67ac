//! The `pages` controller: one static demo page per CSS layout technique.

use crate::app::Actions;
use crate::request::Request;
use crate::response::Response;

const CONTROLLER: &str = "pages";

/// Actions of the `pages` controller, keyed `pages#<action>`.
pub fn controller() -> Actions {
    Actions::new()
        .action(CONTROLLER, "home", home)
        .action(CONTROLLER, "flex", flex)
        .action(CONTROLLER, "grid", grid)
        .action(CONTROLLER, "responsive", responsive)
}

pub async fn home(_req: Request) -> Response {
    Response::html(page(
        "Layouts",
        "",
        r#"<ul>
  <li><a href="/flex">Flexbox</a></li>
  <li><a href="/grid">Grid</a></li>
  <li><a href="/responsive">Responsive</a></li>
</ul>"#,
    ))
}

pub async fn flex(_req: Request) -> Response {
    Response::html(page(
        "Flexbox",
        ".row { display: flex; justify-content: space-between; gap: 1rem; }
.row > div { flex: 1; padding: 1rem; background: #eee; }",
        r#"<div class="row"><div>One</div><div>Two</div><div>Three</div></div>"#,
    ))
}

pub async fn grid(_req: Request) -> Response {
    Response::html(page(
        "Grid",
        ".grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.grid > div { padding: 1rem; background: #eee; }",
        r#"<div class="grid"><div>1</div><div>2</div><div>3</div><div>4</div><div>5</div><div>6</div></div>"#,
    ))
}

pub async fn responsive(_req: Request) -> Response {
    Response::html(page(
        "Responsive",
        ".cols { display: grid; grid-template-columns: 1fr; gap: 1rem; }
.cols > div { padding: 1rem; background: #eee; }
@media (min-width: 40em) { .cols { grid-template-columns: 1fr 1fr; } }
@media (min-width: 64em) { .cols { grid-template-columns: repeat(4, 1fr); } }",
        r#"<div class="cols"><div>A</div><div>B</div><div>C</div><div>D</div></div>"#,
    ))
}

fn page(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    )
}
