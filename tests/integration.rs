// SPDX-License-Identifier: MPL-2.0
use inkfolio::application::contact::{messaging_link, ContactForm};
use inkfolio::application::estimator::estimate;
use inkfolio::application::lightbox::{Direction, LightboxEvent, LightboxKey, LightboxState};
use inkfolio::application::portfolio::{Portfolio, PortfolioEvent};
use inkfolio::config::{self, Config, DEFAULT_MESSAGING_PHONE};
use inkfolio::domain::budget::{BudgetField, BudgetForm, BudgetSelection, ValidationFailure};
use inkfolio::domain::contact::{ContactField, FieldError};
use inkfolio::domain::gallery::FilterTag;
use inkfolio::i18n::I18n;
use inkfolio::infrastructure::catalog;
use std::fs;
use tempfile::tempdir;

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"pt-BR\"\n").expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "pt-BR");

    // CLI wins over the file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn broken_catalog_override_falls_back_to_bundled_data() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "[[items]]\nimage = ").expect("write catalog");

    let (site, warning) = catalog::load(Some(&path)).expect("bundled data");
    assert_eq!(warning, Some("error-catalog-malformed"));
    assert_eq!(site, catalog::load_bundled().expect("bundled data"));

    let (_, warning) = catalog::load(Some(&dir.path().join("missing.toml"))).expect("bundled data");
    assert_eq!(warning, Some("error-catalog-unreadable"));
}

#[test]
fn browsing_a_filtered_portfolio() {
    let site = catalog::load_bundled().expect("bundled data");
    let mut portfolio = Portfolio::new(site.catalog.clone());
    assert_eq!(portfolio.filtered().len(), site.catalog.len());

    portfolio.dispatch(PortfolioEvent::SetFilter(FilterTag::parse("fineline")));
    let fineline: Vec<_> = portfolio.filtered().iter().map(|item| item.id).collect();
    assert!(!fineline.is_empty());
    assert!(portfolio
        .filtered()
        .iter()
        .all(|item| item.category_tag == "fineline"));

    let first = portfolio.filtered()[0].image.clone();
    portfolio.dispatch(PortfolioEvent::Lightbox(LightboxEvent::Open(first)));
    for _ in 0..fineline.len() {
        portfolio.dispatch(PortfolioEvent::Lightbox(LightboxEvent::Navigate(
            Direction::Next,
        )));
    }
    assert_eq!(portfolio.lightbox_state(), LightboxState::Open { index: 0 });

    let view = portfolio.lightbox_view().expect("open lightbox");
    assert_eq!(view.position, 0);
    assert_eq!(view.total, fineline.len());

    portfolio.dispatch(PortfolioEvent::Lightbox(LightboxEvent::Key(
        LightboxKey::Escape,
    )));
    assert!(portfolio.lightbox_view().is_none());
}

#[test]
fn filter_with_no_matches_closes_the_lightbox() {
    let site = catalog::load_bundled().expect("bundled data");
    let mut portfolio = Portfolio::new(site.catalog.clone());
    let image = site.catalog.items()[0].image.clone();

    portfolio.dispatch(PortfolioEvent::Lightbox(LightboxEvent::Open(image)));
    portfolio.dispatch(PortfolioEvent::SetFilter(FilterTag::parse("japanese")));

    assert!(portfolio.filtered().is_empty());
    assert_eq!(portfolio.lightbox_state(), LightboxState::Closed);
}

#[test]
fn estimating_from_bundled_options() {
    let site = catalog::load_bundled().expect("bundled data");
    let mut form = BudgetForm::new();

    let err = BudgetSelection::try_from(&form).expect_err("empty form");
    let ValidationFailure::IncompleteBudget { missing } = err;
    assert_eq!(missing.len(), BudgetField::ALL.len());

    for (field, value) in [
        (BudgetField::Style, "realistic"),
        (BudgetField::Size, "large"),
        (BudgetField::Complexity, "complex"),
        (BudgetField::BodyArea, "back"),
        (BudgetField::Colors, "full"),
    ] {
        form.set(field, site.budget_options.find(field, value).cloned());
    }
    let selection = BudgetSelection::try_from(&form).expect("complete form");
    let result = estimate(&selection);

    assert!(result.min_price > 0);
    assert!(result.max_price > result.min_price);
    assert_eq!(result, estimate(&selection));
}

#[test]
fn contact_request_becomes_a_messaging_link() {
    let i18n = I18n::new(Some("pt-BR".to_string()), &Config::default());
    let mut form = ContactForm::new();

    let failures = form.submit().expect_err("empty form");
    assert!(failures.contains(&(ContactField::Email, FieldError::Required)));

    form.edit(ContactField::Name, "João");
    form.edit(ContactField::Phone, "11987654321");
    form.edit(ContactField::Email, "joao@example.com");
    form.edit(ContactField::Message, "Leão no antebraço");
    let submission = form.submit().expect("valid form");

    let text = i18n.tr_with_args(
        "contact-whatsapp-message",
        &[
            ("name", submission.name.as_str()),
            ("phone", submission.phone.as_str()),
            ("email", submission.email.as_str()),
            ("service", "Não especificado"),
            ("budget", "Não especificado"),
            ("message", submission.message.as_str()),
        ],
    );
    assert!(text.starts_with("Olá!"));
    assert!(text.contains("*Nome:* João"));

    let url = messaging_link(DEFAULT_MESSAGING_PHONE, &text);
    assert!(url.starts_with("https://wa.me/5511999999999?text=Ol%C3%A1!"));
    assert!(!url.contains(' '));
    assert!(!url.contains('\n'));

    form.complete();
    assert_eq!(form.value(ContactField::Name), "");
    assert!(!form.is_submitting());
}
