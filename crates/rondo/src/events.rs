/// Events delivered to the GUI loop by the background services.
#[derive(Debug, Clone)]
pub enum AppEvent {
    SetValue(i64),
    Reload,
}
