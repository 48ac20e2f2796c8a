//! # Use Case Accessor / 用例访问器
//!
//! [`AppRuntime`] wraps [`AppDeps`]; [`UseCases`] builds each use case with
//! its ports taken from those deps.
//!
//! ## Adding a new use case / 添加新用例
//!
//! 1. Implement it in `jn-app/src/usecases`
//! 2. Add a method to `UseCases` that calls its constructor with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use jn_app::usecases::{AddEntry, DeleteEntry, GetEntry, ListEntries};
use jn_app::AppDeps;

/// Central access point for dependencies and use cases.
/// 访问所有应用依赖和用例的中心点。
pub struct AppRuntime {
    pub deps: AppDeps,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Factory for use case instances, wired from `AppDeps`.
/// 用例实例工厂，依赖从 `AppDeps` 连接。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn list_entries(&self) -> ListEntries {
        ListEntries::from_arc(self.runtime.deps.entry_repo.clone())
    }

    pub fn add_entry(&self) -> AddEntry {
        AddEntry::from_ports(
            self.runtime.deps.entry_repo.clone(),
            self.runtime.deps.clock.clone(),
        )
    }

    pub fn get_entry(&self) -> GetEntry {
        GetEntry::from_arc(self.runtime.deps.entry_repo.clone())
    }

    pub fn delete_entry(&self) -> DeleteEntry {
        DeleteEntry::from_arc(self.runtime.deps.entry_repo.clone())
    }
}
