//! Server-rendered landing page.
//!
//! Every visible string goes through the resolver. Markup is kept thin and
//! carries no styling.

use crate::config::Config;
use crate::contact::Field;
use crate::i18n::{strings, LanguageResolver, LocalizedPair};
use crate::whatsapp::whatsapp_quote_link;
use std::fmt::Write;

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn placeholder(field: Field) -> LocalizedPair<'static> {
    match field {
        Field::Name => strings::PLACEHOLDER_NAME,
        Field::Email => strings::PLACEHOLDER_EMAIL,
        Field::Phone => strings::PLACEHOLDER_PHONE,
        Field::Message => strings::PLACEHOLDER_MESSAGE,
    }
}

/// Render `(title, description)` cards as `<article>`s.
fn render_cards(
    out: &mut String,
    cards: &[(LocalizedPair<'static>, LocalizedPair<'static>)],
    t: impl Fn(LocalizedPair<'_>) -> String,
) {
    for (title, text) in cards {
        let _ = write!(out, "<article><h3>{}</h3><p>{}</p></article>", t(*title), t(*text));
    }
}

fn render_about(t: &impl Fn(LocalizedPair<'_>) -> String) -> String {
    let mut highlights = String::new();
    for highlight in strings::ABOUT_HIGHLIGHTS {
        let _ = write!(highlights, "<li>{}</li>", t(highlight));
    }

    let mut stats = String::new();
    for (value, label) in strings::ABOUT_STATS {
        let _ = write!(stats, "<div><strong>{}</strong><span>{}</span></div>", value, t(label));
    }

    let mut skills = String::new();
    for skill in strings::ABOUT_SKILLS {
        let _ = write!(skills, "<li>{}</li>", t(skill));
    }

    format!(
        r#"<section id="about">
<span class="badge">{}</span>
<h2>{}</h2>
<p>{}</p>
<ul class="highlights">{}</ul>
<div class="stats">{}</div>
<ul class="skills">{}</ul>
</section>"#,
        t(strings::ABOUT_BADGE),
        t(strings::ABOUT_HEADING),
        t(strings::ABOUT_INTRO),
        highlights,
        stats,
        skills,
    )
}

fn render_services(t: &impl Fn(LocalizedPair<'_>) -> String) -> String {
    let mut cards = String::new();
    render_cards(&mut cards, &strings::SERVICES, t);

    format!(
        r##"<section id="services">
<span class="badge">{}</span>
<h2>{}</h2>
<p>{}</p>
<div class="cards">{}</div>
<a href="#contact">{}</a>
</section>"##,
        t(strings::SERVICES_BADGE),
        t(strings::SERVICES_HEADING),
        t(strings::SERVICES_INTRO),
        cards,
        t(strings::FORM_TITLE),
    )
}

fn render_portfolio(t: &impl Fn(LocalizedPair<'_>) -> String) -> String {
    let mut projects = String::new();
    for project in strings::PROJECTS {
        let mut tags = String::new();
        for tech in project.technologies {
            let _ = write!(tags, "<li>{}</li>", escape_html(tech));
        }
        let _ = write!(
            projects,
            r#"<article><h3>{}</h3><p>{}</p><ul class="tags">{}</ul></article>"#,
            t(project.title),
            t(project.description),
            tags
        );
    }

    format!(
        r#"<section id="portfolio">
<span class="badge">{}</span>
<h2>{}</h2>
<p>{}</p>
<div class="cards">{}</div>
</section>"#,
        t(strings::PORTFOLIO_BADGE),
        t(strings::PORTFOLIO_HEADING),
        t(strings::PORTFOLIO_INTRO),
        projects,
    )
}

fn render_differentials(t: &impl Fn(LocalizedPair<'_>) -> String) -> String {
    let mut cards = String::new();
    render_cards(&mut cards, &strings::DIFFERENTIALS, t);

    format!(
        r#"<section id="differentials">
<span class="badge">{}</span>
<h2>{}</h2>
<p>{}</p>
<div class="cards">{}</div>
</section>"#,
        t(strings::DIFFERENTIALS_BADGE),
        t(strings::DIFFERENTIALS_HEADING),
        t(strings::DIFFERENTIALS_INTRO),
        cards,
    )
}

/// Render the full page in the resolver's active locale.
pub fn render_index(resolver: &LanguageResolver, config: &Config) -> String {
    let t = |pair: LocalizedPair<'_>| escape_html(resolver.resolve(pair));
    let locale = resolver.active_locale();

    let mut nav = String::new();
    for (anchor, label) in strings::NAV_ITEMS {
        let _ = write!(nav, r#"<a href="{}">{}</a>"#, anchor, t(label));
    }

    let mut services = String::new();
    for service in strings::HERO_SERVICES {
        let _ = write!(services, "<li>{}</li>", t(service));
    }

    let mut inputs = String::new();
    for field in Field::ALL {
        let name = field.as_str();
        let hint = t(placeholder(field));
        let control = match field {
            Field::Message => format!(
                r#"<textarea name="{}" rows="5" placeholder="{}"></textarea>"#,
                name, hint
            ),
            Field::Email => format!(
                r#"<input name="{}" type="email" placeholder="{}">"#,
                name, hint
            ),
            _ => format!(r#"<input name="{}" placeholder="{}">"#, name, hint),
        };
        let _ = write!(
            inputs,
            r#"<div>{}<p class="error" data-error-for="{}"></p></div>"#,
            control, name
        );
    }

    let whatsapp_link = escape_html(&whatsapp_quote_link(resolver, &config.whatsapp_number));
    let email = escape_html(&config.contact_email);

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Site TI</title>
</head>
<body>
<header>
<a class="logo" href="#home">Site TI</a>
<nav>{nav}</nav>
<form method="post" action="/locale"><button type="submit" title="{switch_language}">{lang_upper}</button></form>
</header>
<main>
<section id="home">
<h1>{hero_title}</h1>
<p>{hero_experience}</p>
<ul>{services}</ul>
</section>
{about}
{services_section}
{portfolio}
{differentials}
<section id="contact">
<span class="badge">{contact_badge}</span>
<h2>{contact_heading}</h2>
<p>{contact_intro}</p>
<form id="contact-form" data-fail-title="{failure_title}" data-fail-description="{network_failure}">
<h3>{form_title}</h3>
<p>{form_intro}</p>
{inputs}
<button type="submit" data-busy="{submit_busy}">{submit_idle}</button>
</form>
<div id="toast" role="status"></div>
<ul class="contact-info">
<li>WhatsApp: <a href="{whatsapp_link}">{whatsapp_display}</a></li>
<li>Email: <a href="mailto:{email}">{email}</a></li>
<li>{location_label}: Fortaleza, CE - Brasil</li>
</ul>
<aside>
<h3>{quick_title}</h3>
<p>{quick_text}</p>
<a class="whatsapp" href="{whatsapp_link}">{whatsapp_cta}</a>
</aside>
</section>
</main>
<footer><p>&copy; Site TI. {rights}</p></footer>
<script>{script}</script>
</body>
</html>
"##,
        lang = locale.code(),
        lang_upper = locale.code().to_uppercase(),
        switch_language = t(strings::SWITCH_LANGUAGE),
        nav = nav,
        hero_title = t(strings::HERO_TITLE),
        hero_experience = t(strings::HERO_EXPERIENCE),
        services = services,
        about = render_about(&t),
        services_section = render_services(&t),
        portfolio = render_portfolio(&t),
        differentials = render_differentials(&t),
        contact_badge = t(strings::CONTACT_BADGE),
        contact_heading = t(strings::CONTACT_HEADING),
        contact_intro = t(strings::CONTACT_INTRO),
        failure_title = t(strings::FAILURE_TITLE),
        network_failure = t(strings::NETWORK_FAILURE),
        form_title = t(strings::FORM_TITLE),
        form_intro = t(strings::FORM_INTRO),
        inputs = inputs,
        submit_busy = t(strings::SUBMIT_BUSY),
        submit_idle = t(strings::SUBMIT_IDLE),
        whatsapp_link = whatsapp_link,
        whatsapp_display = escape_html(&config.whatsapp_display),
        email = email,
        location_label = t(strings::LOCATION_LABEL),
        quick_title = t(strings::QUICK_RESPONSE_TITLE),
        quick_text = t(strings::QUICK_RESPONSE_TEXT),
        whatsapp_cta = t(strings::WHATSAPP_CTA),
        rights = t(strings::FOOTER_RIGHTS),
        script = FORM_SCRIPT,
    )
}

/// Posts the form as JSON and renders the response inline.
///
/// Only JSON replies are parsed. Anything else (an empty 409, a plain-text
/// body rejection, a network error) shows the form's localized failure text.
const FORM_SCRIPT: &str = r#"
const form = document.getElementById('contact-form');
const toast = document.getElementById('toast');
const button = form.querySelector('button');
const idle = button.textContent;
const showFailure = () => {
  toast.textContent = `${form.dataset.failTitle} ${form.dataset.failDescription}`;
};
form.querySelectorAll('input, textarea').forEach((el) => {
  el.addEventListener('input', () => {
    form.querySelector(`[data-error-for="${el.name}"]`).textContent = '';
  });
});
form.addEventListener('submit', async (e) => {
  e.preventDefault();
  if (button.disabled) return;
  const body = Object.fromEntries(new FormData(form));
  button.disabled = true;
  button.textContent = button.dataset.busy;
  try {
    const res = await fetch('/api/contact', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body),
    });
    const isJson = (res.headers.get('content-type') || '').includes('application/json');
    const data = isJson ? await res.json() : null;
    form.querySelectorAll('[data-error-for]').forEach((p) => { p.textContent = ''; });
    if (res.status === 422 && data && data.errors) {
      for (const [field, message] of Object.entries(data.errors)) {
        const slot = form.querySelector(`[data-error-for="${field}"]`);
        if (slot) slot.textContent = message;
      }
    } else if (data && data.title) {
      toast.textContent = `${data.title} ${data.description}`;
      if (res.ok) form.reset();
    } else {
      showFailure();
    }
  } catch (err) {
    showFailure();
  } finally {
    button.disabled = false;
    button.textContent = idle;
  }
});
"#;
