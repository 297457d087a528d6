//! Server-side renders of the shell and pages under a given language and
//! viewport. No route builder is registered here, so nav entries render as
//! in-page anchors.

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;

use ui::components::{SiteFooter, SiteHeader};
use ui::core::language::{use_language_provider, Language};
use ui::core::viewport::{use_viewport_provider, Layout, ViewportState};
use ui::i18n::{I18nError, LanguageCode};
use ui::views::{Fencing, Home, OnePage, Programs};

#[derive(Clone, Copy, PartialEq)]
enum Body {
    HeaderOnly,
    Home,
    Fencing,
    Programs,
    OnePage,
}

#[component]
fn Harness(lang: LanguageCode, layout: Layout, scrolled: bool, body: Body) -> Element {
    use_language_provider(lang);
    use_viewport_provider(ViewportState::new(layout, scrolled));

    rsx! {
        SiteHeader {}
        {match body {
            Body::HeaderOnly => rsx! {},
            Body::Home => rsx! { Home {} },
            Body::Fencing => rsx! { Fencing {} },
            Body::Programs => rsx! { Programs {} },
            Body::OnePage => rsx! { OnePage {} },
        }}
        SiteFooter {}
    }
}

fn render(lang: LanguageCode, layout: Layout, scrolled: bool, body: Body) -> String {
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            lang,
            layout,
            scrolled,
            body,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn mobile_viewport_shows_toggle_and_hides_inline_menu() {
    let html = render(LanguageCode::Ko, Layout::Mobile, false, Body::HeaderOnly);
    assert!(html.contains("navbar__menu-toggle"), "toggle missing:\n{html}");
    assert!(!html.contains("navbar__links"), "inline menu rendered on mobile:\n{html}");
    // Drawer starts closed.
    assert!(!html.contains("navbar__drawer"));
}

#[test]
fn desktop_viewport_shows_inline_menu() {
    let html = render(LanguageCode::Ko, Layout::Desktop, false, Body::HeaderOnly);
    assert!(html.contains("navbar__links"));
    assert!(html.contains("language-switcher"));
    assert!(!html.contains("navbar__menu-toggle"));
}

#[test]
fn scrolled_flag_only_changes_the_header_class() {
    let idle = render(LanguageCode::Ko, Layout::Desktop, false, Body::HeaderOnly);
    let scrolled = render(LanguageCode::Ko, Layout::Desktop, true, Body::HeaderOnly);
    assert!(!idle.contains("navbar--scrolled"));
    assert!(scrolled.contains("navbar navbar--scrolled"));
}

#[test]
fn nav_falls_back_to_section_anchors() {
    let html = render(LanguageCode::En, Layout::Desktop, false, Body::HeaderOnly);
    for anchor in ["#about", "#fencing", "#instructors", "#programs"] {
        assert!(html.contains(anchor), "missing nav anchor {anchor}");
    }
    assert!(html.contains(">Instructors<"));
}

#[test]
fn english_home_shows_translated_hero() {
    let html = render(LanguageCode::En, Layout::Desktop, false, Body::Home);
    assert!(html.contains("Better Today Than Yesterday"));
    assert!(html.contains("tel:02-2088-5358"));
    // Content records stay in Korean regardless of language.
    assert!(html.contains("스타펜싱 아카데미"));
}

#[test]
fn chinese_footer_shows_the_shared_phone_number() {
    let html = render(LanguageCode::Zh, Layout::Desktop, false, Body::HeaderOnly);
    assert!(html.contains("02-2088-5358"));
    assert!(html.contains("中文"));
}

#[test]
fn detail_pages_render_their_tables() {
    let fencing = render(LanguageCode::Ko, Layout::Desktop, false, Body::Fencing);
    assert!(fencing.contains("back-button"));
    assert!(fencing.contains("발놀림"));

    let programs = render(LanguageCode::En, Layout::Desktop, false, Body::Programs);
    assert!(programs.contains("program-class--athlete"));
    assert!(programs.contains("Hobby Class"));
    assert!(programs.contains("개인 레슨 예약 가능"));
}

#[test]
fn one_page_layout_carries_every_section_anchor() {
    let html = render(LanguageCode::Ko, Layout::Mobile, false, Body::OnePage);
    for id in ["id=\"home\"", "id=\"about\"", "id=\"fencing\"", "id=\"instructors\"", "id=\"programs\""] {
        assert!(html.contains(id), "missing section {id}");
    }
    assert!(!html.contains("back-button"));
    assert!(html.contains("선수반 성과"), "one-page programs lacks athlete results");
    assert!(html.contains("2025' 대한중고펜싱연맹 대회 개인전 3위"));
}

#[component]
fn SwitchingHarness() -> Element {
    use_language_provider(LanguageCode::Ko);
    use_viewport_provider(ViewportState::new(Layout::Desktop, false));

    rsx! {
        SiteHeader {}
        Home {}
        OnePage {}
        SiteFooter {}
    }
}

#[test]
fn switching_language_rerenders_every_view() {
    let mut dom = VirtualDom::new(SwitchingHarness);
    dom.rebuild_in_place();
    let korean = dioxus_ssr::render(&dom);
    assert!(korean.contains("어제보다 멋진 오늘"));

    let lang = dom.in_runtime(|| ScopeId::APP.in_runtime(consume_context::<Language>));

    let rejected = dom.in_runtime(|| lang.set("fr"));
    assert_eq!(rejected, Err(I18nError::InvalidLanguage("fr".into())));
    assert_eq!(dom.in_runtime(|| lang.get()), LanguageCode::Ko);

    assert_eq!(dom.in_runtime(|| lang.set("en")), Ok(true));
    dom.render_immediate(&mut NoOpMutations);
    let english = dioxus_ssr::render(&dom);
    assert!(english.contains("Better Today Than Yesterday"));
    assert!(!english.contains("어제보다 멋진 오늘"), "stale Korean text after switch");
    assert!(english.contains("Athlete Results"));

    // Same language again: nothing to do.
    assert_eq!(dom.in_runtime(|| lang.set("en")), Ok(false));
    assert!(!dom.in_runtime(|| lang.select(LanguageCode::En)));
    assert_eq!(dom.in_runtime(|| lang.get()), LanguageCode::En);
}

#[test]
fn typed_selection_switches_without_parsing() {
    let mut dom = VirtualDom::new(SwitchingHarness);
    dom.rebuild_in_place();

    let lang = dom.in_runtime(|| ScopeId::APP.in_runtime(consume_context::<Language>));
    assert!(dom.in_runtime(|| lang.select(LanguageCode::Zh)));
    dom.render_immediate(&mut NoOpMutations);

    let chinese = dioxus_ssr::render(&dom);
    assert!(chinese.contains("比昨天更精彩的今天"));
    assert!(chinese.contains("选手班成绩"));
    assert!(!chinese.contains("어제보다 멋진 오늘"));
}
