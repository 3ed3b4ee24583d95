//! Server-rendered pages. Minimal HTML assembled with `format!`; styling
//! and client scripts live with the deployment, not here.

use axum::{response::Html, routing::get, Router};

use crate::auth::session::AuthSession;
use crate::predict::model::PredictionInput;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(home))
        .route("/contact", get(contact))
        .route("/aboutus", get(aboutus))
        .route("/main", get(main_page))
}

pub async fn home(AuthSession(session): AuthSession) -> Html<String> {
    Html(page(
        "Home",
        &session.name,
        &format!("<h1>Welcome, {}</h1><p>Crop yield portal dashboard.</p>", session.name),
    ))
}

pub async fn contact(AuthSession(session): AuthSession) -> Html<String> {
    Html(page(
        "Contact",
        &session.name,
        "<h1>Contact</h1><p>Reach the farm team by phone or email.</p>",
    ))
}

pub async fn aboutus(AuthSession(session): AuthSession) -> Html<String> {
    Html(page(
        "About Us",
        &session.name,
        "<h1>About Us</h1><p>Sensor-driven crop yield estimation.</p>",
    ))
}

pub async fn main_page(AuthSession(session): AuthSession) -> Html<String> {
    Html(page(
        "Live Readings",
        &session.name,
        r#"<h1>Live Readings</h1>
<table id="readings">
    <tr><th>Id</th><th>Temperature</th><th>Humidity</th><th>Rain</th><th>Date</th><th>Time</th><th>Device</th></tr>
</table>
<script>
    const source = new EventSource("/events");
    source.addEventListener("new_reading", (e) => {
        const r = JSON.parse(e.data);
        const row = document.getElementById("readings").insertRow(-1);
        [r.id, r.temperature, r.humidity, r.rain, r.date, r.time, r.device]
            .forEach((v) => { row.insertCell(-1).textContent = v; });
    });
</script>"#,
    ))
}

pub fn login_page(err: Option<&str>) -> String {
    let error_html = err
        .map(|msg| format!(r#"<p class="error">{msg}</p>"#))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Login</title></head>
<body>
<h1>Login</h1>
{error_html}
<form method="post" action="/login">
    <label>Username <input type="text" name="username"></label>
    <label>Password <input type="password" name="password"></label>
    <button type="submit">Log in</button>
</form>
</body>
</html>"#
    )
}

pub fn predict_form_page(name: &str) -> String {
    page(
        "Predict Yield",
        name,
        r#"<h1>Predict Yield</h1>
<form method="post" action="/predict">
    <label>pH <input type="text" name="pH"></label>
    <label>Rainfall <input type="text" name="rainfall"></label>
    <label>Temperature <input type="text" name="temperature"></label>
    <label>Area (hectares) <input type="text" name="Area_in_hectares"></label>
    <button type="submit">Predict</button>
</form>"#,
    )
}

pub fn prediction_page(name: &str, message: &str, input: &PredictionInput) -> String {
    page(
        "Prediction",
        name,
        &format!(
            r#"<h1>Prediction</h1>
<p>{message}</p>
<ul>
    <li>pH: {ph}</li>
    <li>Rainfall: {rainfall}</li>
    <li>Temperature: {temperature}</li>
    <li>Area: {area} ha</li>
</ul>"#,
            ph = input.ph,
            rainfall = input.rainfall,
            temperature = input.temperature,
            area = input.area_hectares,
        ),
    )
}

fn page(title: &str, name: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>{title}</title></head>
<body>
<nav>
    <a href="/home">Home</a>
    <a href="/main">Live Readings</a>
    <a href="/predict">Predict</a>
    <a href="/contact">Contact</a>
    <a href="/aboutus">About Us</a>
    <span>Signed in as {name}</span>
    <a href="/logout">Log out</a>
</nav>
{body}
</body>
</html>"#
    )
}
