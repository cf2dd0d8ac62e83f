//! Page render use cases: client bootstrap, attach guard and widget block.

mod support;

use std::sync::Arc;

use sr_app::usecases::client::{AttachReveal, BuildClientSettings};
use sr_app::usecases::widget::RenderWidgetBlock;
use sr_core::options::EffectiveOptions;
use sr_core::ports::{NodeId, SecretStoreError};
use sr_core::reveal::{ClientSettings, RevealElement};
use sr_core::settings::VisibilityMode;
use sr_core::{AnimationOptions, RevealConfig, Settings};
use support::*;

fn widget_settings(key: Option<&str>) -> Settings {
    let mut settings = Settings::default();
    settings.widget.widget_key = key.map(str::to_string);
    settings
}

fn element(selector: &str) -> RevealElement {
    RevealElement {
        target: selector.to_string(),
        options: EffectiveOptions::build(&AnimationOptions::default(), &RevealConfig::default()),
    }
}

#[tokio::test]
async fn widget_without_key_name_renders_nothing() {
    let mut secrets = MockSecrets::new();
    secrets.expect_get().times(0);

    let uc = RenderWidgetBlock::new(Arc::new(settings_returning(widget_settings(None))), Arc::new(secrets));
    assert_eq!(uc.execute().await, "");
}

#[tokio::test]
async fn widget_with_unknown_secret_renders_nothing() {
    let mut secrets = MockSecrets::new();
    secrets.expect_get().returning(|_| Ok(None));

    let uc = RenderWidgetBlock::new(
        Arc::new(settings_returning(widget_settings(Some("tochat")))),
        Arc::new(secrets),
    );
    assert_eq!(uc.execute().await, "");
}

#[tokio::test]
async fn widget_key_store_fault_renders_nothing() {
    let mut secrets = MockSecrets::new();
    secrets
        .expect_get()
        .returning(|_| Err(SecretStoreError::Corrupt("bad json".into())));

    let uc = RenderWidgetBlock::new(
        Arc::new(settings_returning(widget_settings(Some("tochat")))),
        Arc::new(secrets),
    );
    assert_eq!(uc.execute().await, "");
}

#[tokio::test]
async fn widget_with_key_renders_embed_tag() {
    let mut secrets = MockSecrets::new();
    secrets
        .expect_get()
        .withf(|name| name == "tochat")
        .returning(|_| Ok(Some("abc123".into())));

    let uc = RenderWidgetBlock::new(
        Arc::new(settings_returning(widget_settings(Some("tochat")))),
        Arc::new(secrets),
    );
    assert_eq!(
        uc.execute().await,
        r#"<script defer src="//widget.tochat.be/bundle.js?key=abc123"></script>"#
    );
}

#[tokio::test]
async fn nothing_attached_when_loading_disabled() {
    let mut settings = Settings::default();
    settings.library.load = false;
    let mut repo = MockTargetRepo::new();
    repo.expect_list_enabled().times(0);

    let uc = BuildClientSettings::new(
        Arc::new(repo),
        Arc::new(settings_returning(settings)),
        Arc::new(MockProbe::new()),
        Arc::new(MockPayloadCache::new()),
    );
    assert!(uc.execute("/node/1", "/node/1").await.unwrap().is_none());
}

#[tokio::test]
async fn nothing_attached_on_excluded_page() {
    let mut settings = Settings::default();
    settings.visibility.mode = VisibilityMode::OnlyListed;
    settings.visibility.pages = vec!["/blog/*".into()];

    let uc = BuildClientSettings::new(
        Arc::new(MockTargetRepo::new()),
        Arc::new(settings_returning(settings)),
        Arc::new(MockProbe::new()),
        Arc::new(MockPayloadCache::new()),
    );
    assert!(uc.execute("/about", "/node/1").await.unwrap().is_none());
}

#[tokio::test]
async fn cached_elements_skip_the_repository() {
    let mut repo = MockTargetRepo::new();
    repo.expect_list_enabled().times(0);
    let mut cache = MockPayloadCache::new();
    cache.expect_get().returning(|| Some(vec![element(".cached")]));
    cache.expect_put().times(0);
    let mut probe = MockProbe::new();
    probe.expect_is_installed().return_const(true);

    let uc = BuildClientSettings::new(
        Arc::new(repo),
        Arc::new(settings_returning(Settings::default())),
        Arc::new(probe),
        Arc::new(cache),
    );
    let page = uc.execute("/", "/node/1").await.unwrap().unwrap();

    assert_eq!(page.settings.elements[0].target, ".cached");
    assert_eq!(page.library_url, "/libraries/scrollreveal/dist/scrollreveal.min.js");
}

#[tokio::test]
async fn cache_miss_rebuilds_and_stores_elements() {
    let mut repo = MockTargetRepo::new();
    repo.expect_list_enabled().times(1).returning(|| Ok(vec![]));
    let mut cache = MockPayloadCache::new();
    cache.expect_get().returning(|| None);
    cache.expect_put().times(1).return_const(());
    let mut probe = MockProbe::new();
    probe.expect_is_installed().return_const(false);

    let uc = BuildClientSettings::new(
        Arc::new(repo),
        Arc::new(settings_returning(Settings::default())),
        Arc::new(probe),
        Arc::new(cache),
    );
    let page = uc.execute("/", "/node/1").await.unwrap().unwrap();

    assert!(page.settings.elements.is_empty());
    assert!(page.library_url.starts_with("https://unpkg.com/scrollreveal@4.0.9/dist/"));
}

#[test]
fn each_node_is_revealed_once_across_passes() {
    let mut document = MockDocument::new();
    document
        .expect_query_selector_all()
        .returning(|_| vec![NodeId(1), NodeId(2)]);
    let mut library = MockLibrary::new();
    library.expect_set_debug().times(0);
    library.expect_reveal().times(2).returning(|_, _| Ok(()));

    let settings = ClientSettings {
        debug: false,
        elements: vec![element(".hero")],
    };
    let mut uc = AttachReveal::new(Arc::new(document), Arc::new(library));

    assert_eq!(uc.execute(&settings).unwrap(), 2);
    assert_eq!(uc.execute(&settings).unwrap(), 0);
}

#[test]
fn debug_flag_is_forwarded_to_library() {
    let mut document = MockDocument::new();
    document.expect_query_selector_all().returning(|_| vec![]);
    let mut library = MockLibrary::new();
    library
        .expect_set_debug()
        .withf(|debug| *debug)
        .times(1)
        .return_const(());

    let settings = ClientSettings {
        debug: true,
        elements: vec![element(".hero")],
    };
    let mut uc = AttachReveal::new(Arc::new(document), Arc::new(library));
    assert_eq!(uc.execute(&settings).unwrap(), 0);
}

#[test]
fn failed_reveal_is_retried_on_next_pass() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    let mut document = MockDocument::new();
    document
        .expect_query_selector_all()
        .returning(|_| vec![NodeId(1), NodeId(2), NodeId(3)]);

    let calls = Arc::new(AtomicUsize::new(0));
    let revealed = Arc::new(Mutex::new(Vec::new()));
    let mut library = MockLibrary::new();
    library.expect_set_debug().times(0);
    {
        let calls = calls.clone();
        let revealed = revealed.clone();
        library.expect_reveal().returning(move |node, _| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(anyhow::anyhow!("transient"));
            }
            revealed.lock().unwrap().push(node);
            Ok(())
        });
    }

    let settings = ClientSettings {
        debug: false,
        elements: vec![element(".hero")],
    };
    let mut uc = AttachReveal::new(Arc::new(document), Arc::new(library));

    // 首次失败的节点不计入，其余节点照常处理
    assert_eq!(uc.execute(&settings).unwrap(), 2);
    assert_eq!(uc.execute(&settings).unwrap(), 1);
    assert_eq!(uc.execute(&settings).unwrap(), 0);

    let mut nodes = revealed.lock().unwrap().clone();
    nodes.sort();
    assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}
