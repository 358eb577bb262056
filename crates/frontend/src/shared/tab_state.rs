//! Tab selection that survives navigation.
//!
//! The active tab comes from three places: the optional tab segment of the
//! route, the preference persisted for the owning entity, and a fixed default.
//! `TabSelection` is a pure state machine over those inputs; it answers which
//! tab is active and emits the storage writes and navigations needed to keep
//! route and preference consistent. `TabController` executes those effects
//! against a `KeyValueStore` and a `Navigator`.

use super::storage::KeyValueStore;

/// Fixed set of tab identifiers with one default member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSet {
    tabs: &'static [&'static str],
    default: &'static str,
}

impl TabSet {
    pub const fn new(tabs: &'static [&'static str], default: &'static str) -> Self {
        Self { tabs, default }
    }

    pub fn contains(&self, tab: &str) -> bool {
        self.tabs.contains(&tab)
    }

    pub fn default_tab(&self) -> &'static str {
        self.default
    }

    pub fn tabs(&self) -> &'static [&'static str] {
        self.tabs
    }

    /// The set's own copy of `tab`, or `None` for anything outside the set
    fn member(&self, tab: Option<&str>) -> Option<&'static str> {
        let tab = tab?;
        self.tabs.iter().copied().find(|t| *t == tab)
    }
}

/// Route tab if present, else persisted tab if present, else the default
pub fn resolve<'a>(
    route_tab: Option<&'a str>,
    persisted_tab: Option<&'a str>,
    default: &'a str,
) -> &'a str {
    route_tab.or(persisted_tab).unwrap_or(default)
}

/// Storage key for a preference owned by `scope`, `None` until the owner is known
pub fn scoped_key(scope: Option<&str>, suffix: &str) -> Option<String> {
    scope
        .filter(|scope| !scope.is_empty())
        .map(|scope| format!("{}_{}", scope, suffix))
}

/// What the page currently shows: route and the owning entity's preference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabContext {
    /// Route path without the tab segment
    pub base_path: String,
    pub route_tab: Option<String>,
    /// Key owned by the entity; `None` until the entity has loaded
    pub storage_key: Option<String>,
    pub persisted_tab: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabTrigger {
    /// Route changed or the owning entity finished loading
    ContextChanged(TabContext),
    /// The user picked a tab
    TabActivated(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEffect {
    Persist { key: String, tab: String },
    Navigate { path: String, replace: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    tabs: TabSet,
    context: Option<TabContext>,
}

impl TabSelection {
    pub fn new(tabs: TabSet) -> Self {
        Self {
            tabs,
            context: None,
        }
    }

    pub fn tabs(&self) -> TabSet {
        self.tabs
    }

    /// The resolved tab; always a member of the tab set
    pub fn current(&self) -> &'static str {
        let Some(ctx) = self.context.as_ref() else {
            return self.tabs.default_tab();
        };
        resolve(
            self.tabs.member(ctx.route_tab.as_deref()),
            self.tabs.member(ctx.persisted_tab.as_deref()),
            self.tabs.default_tab(),
        )
    }

    pub fn path_for(&self, tab: &str) -> Option<String> {
        self.context
            .as_ref()
            .map(|ctx| format!("{}/{}", ctx.base_path.trim_end_matches('/'), tab))
    }

    pub fn apply(&mut self, trigger: TabTrigger) -> Vec<TabEffect> {
        match trigger {
            TabTrigger::ContextChanged(ctx) => {
                // the persisted value is only read back when route or owner moved;
                // otherwise nothing changed that reconciliation cares about
                if let Some(prev) = self.context.as_ref() {
                    if prev.base_path == ctx.base_path
                        && prev.route_tab == ctx.route_tab
                        && prev.storage_key == ctx.storage_key
                    {
                        return Vec::new();
                    }
                }
                self.context = Some(ctx);
                self.reconcile()
            }
            TabTrigger::TabActivated(tab) => self.activate(tab),
        }
    }

    fn reconcile(&mut self) -> Vec<TabEffect> {
        let current = self.current();
        let tabs = self.tabs;
        let Some(ctx) = self.context.as_mut() else {
            return Vec::new();
        };
        // no owner yet: show route or default, touch neither storage nor route
        let Some(key) = ctx.storage_key.clone() else {
            return Vec::new();
        };

        match ctx.route_tab.as_deref() {
            Some(route_tab) if tabs.contains(route_tab) => {
                if ctx.persisted_tab.as_deref() == Some(route_tab) {
                    return Vec::new();
                }
                ctx.persisted_tab = Some(route_tab.to_string());
                vec![TabEffect::Persist {
                    key,
                    tab: route_tab.to_string(),
                }]
            }
            Some(_) => {
                let path = format!("{}/{}", ctx.base_path.trim_end_matches('/'), current);
                vec![TabEffect::Navigate {
                    path,
                    replace: true,
                }]
            }
            None => match tabs.member(ctx.persisted_tab.as_deref()) {
                Some(persisted) => {
                    let path = format!("{}/{}", ctx.base_path.trim_end_matches('/'), persisted);
                    vec![TabEffect::Navigate {
                        path,
                        replace: true,
                    }]
                }
                None => Vec::new(),
            },
        }
    }

    fn activate(&mut self, tab: String) -> Vec<TabEffect> {
        if !self.tabs.contains(&tab) || tab == self.current() {
            return Vec::new();
        }
        let Some(path) = self.path_for(&tab) else {
            return Vec::new();
        };
        let Some(ctx) = self.context.as_mut() else {
            return Vec::new();
        };
        let navigate = TabEffect::Navigate {
            path,
            replace: false,
        };
        // persisted once the owner is known and the route carries the tab
        let Some(key) = ctx.storage_key.clone() else {
            return vec![navigate];
        };
        ctx.persisted_tab = Some(tab.clone());
        vec![TabEffect::Persist { key, tab }, navigate]
    }
}

/// Route navigation capability
pub trait Navigator {
    fn navigate(&self, path: &str, replace: bool);
}

/// Runs a `TabSelection` against real storage and navigation
pub struct TabController<S: KeyValueStore, N: Navigator> {
    selection: TabSelection,
    store: S,
    navigator: N,
}

impl<S: KeyValueStore, N: Navigator> TabController<S, N> {
    pub fn new(selection: TabSelection, store: S, navigator: N) -> Self {
        Self {
            selection,
            store,
            navigator,
        }
    }

    pub fn current(&self) -> &'static str {
        self.selection.current()
    }

    /// Reconciles after a route change or entity load
    pub fn observe(
        &mut self,
        base_path: String,
        route_tab: Option<String>,
        storage_key: Option<String>,
    ) {
        let persisted_tab = storage_key.as_deref().and_then(|key| self.store.get(key));
        self.run(TabTrigger::ContextChanged(TabContext {
            base_path,
            route_tab,
            storage_key,
            persisted_tab,
        }));
    }

    pub fn activate(&mut self, tab: &str) {
        self.run(TabTrigger::TabActivated(tab.to_string()));
    }

    pub fn into_selection(self) -> TabSelection {
        self.selection
    }

    fn run(&mut self, trigger: TabTrigger) {
        for effect in self.selection.apply(trigger) {
            match effect {
                TabEffect::Persist { key, tab } => self.store.set(&key, &tab),
                TabEffect::Navigate { path, replace } => {
                    log::debug!("tab navigation: {} (replace={})", path, replace);
                    self.navigator.navigate(&path, replace);
                }
            }
        }
    }
}
