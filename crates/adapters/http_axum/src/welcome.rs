//! Welcome page — lists the available API routes.

use axum::response::Html;

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Surfs Up API</title></head>
<body>
<h1>Welcome to Surfs Up API!</h1>
<p>Available Routes:</p>
<ul>
<li><a href="/api/v1.0/precipitation">/api/v1.0/precipitation</a></li>
<li><a href="/api/v1.0/stations">/api/v1.0/stations</a></li>
<li><a href="/api/v1.0/stations/details">/api/v1.0/stations/details</a></li>
<li><a href="/api/v1.0/tobs">/api/v1.0/tobs</a></li>
<li>/api/v1.0/&lt;start_date&gt;</li>
<li>/api/v1.0/&lt;start_date&gt;/&lt;end_date&gt;</li>
</ul>
<p>Dates use the <code>YYYY-MM-DD</code> format.</p>
</body>
</html>
"#;

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}
