use crate::helpers::spawn_app;
use rapid_jobs_waitlist::domain::EMAIL_PATTERN;

#[tokio::test]
async fn landing_page_renders_the_waitlist_form() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_landing_page("").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/html; charset=utf-8"
    );
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"<form id="waitlist-form""#));
    assert!(page.contains(&format!(r#"data-pattern="{}""#, EMAIL_PATTERN)));
    assert!(page.contains("Join waitlist"));
}

#[tokio::test]
async fn landing_page_honours_the_lang_parameter() {
    let app = spawn_app().await;

    let response = app.get_landing_page("?lang=es").await;

    assert_eq!(response.headers()["content-language"].to_str().unwrap(), "es");
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"<html lang="es">"#));
    assert!(page.contains("Unirse a la lista"));
}

#[tokio::test]
async fn landing_page_falls_back_to_accept_language() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}/", &app.address))
        .header("Accept-Language", "es-SV,es;q=0.9,en;q=0.8")
        .send()
        .await
        .expect("Failed to execute request.");

    let page = response.text().await.unwrap();
    assert!(page.contains("Unirse a la lista"));
}

#[tokio::test]
async fn unsupported_locales_fall_back_to_english() {
    let app = spawn_app().await;

    let response = app.get_landing_page("?lang=fr").await;

    assert_eq!(response.headers()["content-language"].to_str().unwrap(), "en");
    let page = response.text().await.unwrap();
    assert!(page.contains("Join waitlist"));
}
