//! # Use Case Accessor / 用例访问器
//!
//! Each method returns a use case with its ports already wired from
//! [`AppDeps`]. Commands never pick ports themselves.
//!
//! 每个方法返回一个已从 `AppDeps` 连接好端口的用例。

use crate::deps::AppDeps;
use crate::usecases::client::{BuildClientSettings, BuildPreview};
use crate::usecases::settings::{CheckLibraryStatus, GetSettings, UpdateSettings};
use crate::usecases::targets::{
    DeleteTarget, DuplicateTarget, ListTargets, LoadTargetForm, SubmitTargetForm,
};
use crate::usecases::widget::{RenderWidgetBlock, UpdateWidgetSettings};

/// Factory over [`AppDeps`].
///
/// `AttachReveal` is not listed here: it runs against a page's document and
/// library handles, which `AppDeps` does not carry.
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    /// # Examples
    ///
    /// ```rust,no_run
    /// # use sr_app::{AppDeps, UseCases};
    /// # use sr_app::usecases::targets::ListParams;
    /// # async fn example(deps: &AppDeps) -> anyhow::Result<()> {
    /// let view = UseCases::new(deps).list_targets().execute(ListParams::default()).await?;
    /// println!("{} targets", view.pager.total);
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_targets(&self) -> ListTargets {
        ListTargets::new(self.deps.target_repo.clone())
    }

    pub fn load_target_form(&self) -> LoadTargetForm {
        LoadTargetForm::new(self.deps.target_repo.clone(), self.deps.settings.clone())
    }

    pub fn submit_target_form(&self) -> SubmitTargetForm {
        SubmitTargetForm::new(
            self.deps.target_repo.clone(),
            self.deps.derived_cache.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn delete_target(&self) -> DeleteTarget {
        DeleteTarget::new(self.deps.target_repo.clone(), self.deps.derived_cache.clone())
    }

    pub fn duplicate_target(&self) -> DuplicateTarget {
        DuplicateTarget::new(
            self.deps.target_repo.clone(),
            self.deps.derived_cache.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.deps.settings.clone())
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(self.deps.settings.clone(), self.deps.derived_cache.clone())
    }

    pub fn check_library_status(&self) -> CheckLibraryStatus {
        CheckLibraryStatus::new(self.deps.settings.clone(), self.deps.library_probe.clone())
    }

    /// Page-render payload: library URL plus the element list.
    /// 页面渲染数据。
    pub fn build_client_settings(&self) -> BuildClientSettings {
        BuildClientSettings::new(
            self.deps.target_repo.clone(),
            self.deps.settings.clone(),
            self.deps.library_probe.clone(),
            self.deps.reveal_cache.clone(),
        )
    }

    pub fn build_preview(&self) -> BuildPreview {
        BuildPreview::new(self.deps.settings.clone())
    }

    pub fn render_widget_block(&self) -> RenderWidgetBlock {
        RenderWidgetBlock::new(self.deps.settings.clone(), self.deps.secrets.clone())
    }

    pub fn update_widget_settings(&self) -> UpdateWidgetSettings {
        UpdateWidgetSettings::new(self.deps.settings.clone(), self.deps.derived_cache.clone())
    }
}
