use crate::domain::EMAIL_PATTERN;
use crate::i18n::Locale;
use actix_web::http::header::{ContentType, ACCEPT_LANGUAGE, CONTENT_LANGUAGE};
use actix_web::{web, HttpRequest, HttpResponse};
use htmlescape::encode_minimal;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    lang: Option<String>,
}

pub async fn landing_page(
    params: web::Query<QueryParams>,
    request: HttpRequest,
) -> HttpResponse {
    let accept_language = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = Locale::negotiate(params.lang.as_deref(), accept_language);

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((CONTENT_LANGUAGE, locale.as_str()))
        .body(render(locale))
}

fn render(locale: Locale) -> String {
    let t = |key: &str| encode_minimal(locale.t(key));
    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{brand}</title>
    <style>{style}</style>
</head>
<body>
    <header>
        <strong>{brand}</strong>
        <span>{tagline}</span>
        <nav>
            <a href="#home">{nav_home}</a>
            <a href="#how">{nav_how}</a>
            <a href="#about">{nav_about}</a>
            <a href="mailto:support@rapidjobs.app">{nav_help}</a>
            <a href="#get-app">{nav_get_app}</a>
            <a href="/?lang=en">EN</a>
            <a href="/?lang=es">ES</a>
        </nav>
    </header>
    <main>
        <section id="home">
            <p class="eyebrow">{beta}</p>
            <h1>{title}</h1>
            <p>{subtitle}</p>
            <form id="waitlist-form"
                  data-pattern="{pattern}"
                  data-invalid="{invalid}"
                  data-success="{success}"
                  data-error="{error}"
                  data-join="{join}"
                  data-joining="{joining}"
                  novalidate>
                <input id="email" type="email" name="email" placeholder="{placeholder}" required>
                <button id="waitlist-submit" type="submit">{join}</button>
            </form>
            <p id="waitlist-message" role="status" hidden></p>
        </section>
        <section id="how">
            <h2>{how_title}</h2>
            <p>{how_subtitle}</p>
        </section>
        <section id="about">
            <h2>{about_title}</h2>
            <p>{about_launch}</p>
            <p>{about_p1}</p>
        </section>
    </main>
    <footer id="get-app">
        <span>{footer_get_app}</span>
        <span>{app_store}</span>
        <span>{play_store}</span>
    </footer>
    <script>{script}</script>
</body>
</html>"##,
        lang = locale.as_str(),
        style = STYLE,
        script = WAITLIST_SCRIPT,
        pattern = encode_minimal(EMAIL_PATTERN),
        brand = t("brand.name"),
        tagline = t("brand.tagline"),
        nav_home = t("nav.home"),
        nav_how = t("nav.how"),
        nav_about = t("nav.about"),
        nav_help = t("nav.help"),
        nav_get_app = t("nav.getApp"),
        beta = t("hero.beta"),
        title = t("hero.title"),
        subtitle = t("hero.subtitle"),
        placeholder = t("hero.placeholder"),
        join = t("hero.join"),
        joining = t("hero.joining"),
        invalid = t("form.invalid"),
        success = t("form.success"),
        error = t("form.error"),
        how_title = t("how.title"),
        how_subtitle = t("how.subtitle"),
        about_title = t("about.title"),
        about_launch = t("about.launch"),
        about_p1 = t("about.p1"),
        footer_get_app = t("footer.getApp"),
        app_store = t("download.appstore"),
        play_store = t("download.playstore"),
    )
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #f8fafc; }
header, main, footer { max-width: 64rem; margin: 0 auto; padding: 1.5rem; }
nav a { color: #c7d2fe; margin-right: 1rem; }
.eyebrow { text-transform: uppercase; letter-spacing: 0.3em; color: #a5b4fc; }
form { display: flex; gap: 0.75rem; }
input { flex: 1; padding: 0.75rem; border-radius: 1rem; border: 1px solid #334155; }
button { padding: 0.75rem 2rem; border-radius: 1rem; border: 0; background: #6366f1; color: #fff; }
button:disabled { opacity: 0.6; }
.success { color: #6ee7b7; }
.error { color: #fda4af; }
"#;

// Client half of the waitlist flow. Every outcome clears the disabled state.
const WAITLIST_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById("waitlist-form");
  var input = document.getElementById("email");
  var button = document.getElementById("waitlist-submit");
  var message = document.getElementById("waitlist-message");
  var copy = form.dataset;
  var pattern = new RegExp(copy.pattern);

  function show(kind, text) {
    message.textContent = text;
    message.className = kind;
    message.hidden = false;
  }

  form.addEventListener("submit", async function (event) {
    event.preventDefault();
    message.hidden = true;
    var email = input.value;
    if (!pattern.test(email)) {
      show("error", copy.invalid);
      return;
    }
    button.disabled = true;
    button.textContent = copy.joining;
    var outcome = { kind: "error", text: copy.error };
    try {
      var response = await fetch("/api/waitlist", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ email: email })
      });
      var data = await response.json().catch(function () { return null; });
      if (response.ok && data !== null) {
        input.value = "";
        outcome = { kind: "success", text: copy.success };
      } else if (data && typeof data.error === "string") {
        outcome.text = data.error;
      }
    } catch (_) {
      // network failure: the generic message stands
    } finally {
      button.disabled = false;
      button.textContent = copy.join;
    }
    show(outcome.kind, outcome.text);
  });
})();
"#;
