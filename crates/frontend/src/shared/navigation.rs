use crate::shared::tab_state::Navigator;
use leptos_router::NavigateOptions;

/// `Navigator` backed by the router's navigate function
pub struct RouterNavigator<F>(pub F)
where
    F: Fn(&str, NavigateOptions);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str, replace: bool) {
        (self.0)(
            path,
            NavigateOptions {
                replace,
                ..Default::default()
            },
        );
    }
}
