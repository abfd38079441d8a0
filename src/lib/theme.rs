//! Tailwind class constants for the navigation bar. Motion lives here as CSS
//! transitions and keyframe animations (see `style/motion.css`) so the
//! render decisions in `features::nav` stay free of presentation details.

pub struct Theme;

impl Theme {
    /// Sticky bar container; slides down and fades in on first paint.
    pub const NAV: &'static str = "bg-white dark:bg-gray-800 shadow-sm sticky top-0 z-50 border-b border-gray-200 dark:border-gray-700 animate-nav-enter";

    /// Brand link wrapper with hover grow and tap shrink.
    pub const BRAND: &'static str =
        "flex items-center transition-transform duration-200 hover:scale-105 active:scale-95";

    /// Gradient brand text.
    pub const BRAND_TEXT: &'static str = "text-xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent transition-transform duration-200 hover:scale-110";

    /// List item around a pill link: lifts on hover, shrinks on tap.
    pub const PILL_ITEM: &'static str =
        "transition-transform duration-150 ease-out hover:-translate-y-0.5 active:scale-95";

    pub const PILL_BASE: &'static str =
        "flex items-center gap-2 relative py-2 px-3 rounded-lg transition-colors";
    pub const PILL_ACTIVE: &'static str = "text-indigo-600 bg-indigo-50 dark:bg-indigo-900/20";
    pub const PILL_IDLE: &'static str = "hover:bg-gray-100 dark:hover:bg-gray-700";

    pub const PILL_ICON_ACTIVE: &'static str = "material-symbols-outlined text-lg text-indigo-600";
    pub const PILL_ICON_IDLE: &'static str =
        "material-symbols-outlined text-lg text-gray-600 dark:text-gray-300";

    /// Border ring that scales in around the active pill link.
    pub const PILL_INDICATOR: &'static str =
        "absolute inset-0 border-2 border-indigo-400 rounded-lg animate-indicator-in";

    /// Wrapper around button-style links.
    pub const BUTTON_GROUP: &'static str = "ml-2 flex items-center gap-2 transition-transform duration-200 hover:scale-105 active:scale-95";

    pub const BUTTON_BASE: &'static str = "flex items-center gap-2 relative px-4 py-2 rounded-lg text-sm font-medium border transition-all";
    pub const BUTTON_ACTIVE: &'static str = "bg-indigo-600 text-white border-indigo-700 shadow-md";
    pub const BUTTON_IDLE: &'static str = "bg-white dark:bg-gray-700 text-gray-700 dark:text-gray-200 border-gray-200 dark:border-gray-600 hover:bg-gray-50 dark:hover:bg-gray-600";

    pub const BUTTON_ICON_ACTIVE: &'static str = "material-symbols-outlined text-lg text-white";
    pub const BUTTON_ICON_IDLE: &'static str =
        "material-symbols-outlined text-lg text-indigo-500 dark:text-indigo-400";

    /// Tint overlay that fades in over the active button link.
    pub const BUTTON_INDICATOR: &'static str =
        "absolute inset-0 rounded-lg bg-indigo-700/20 animate-fade-in";

    /// Badge-style link without an active state.
    pub const BADGE: &'static str = "flex items-center gap-2 px-4 py-2 rounded-lg bg-indigo-100 dark:bg-indigo-900/50 text-indigo-700 dark:text-indigo-200 text-sm font-medium border border-indigo-200 dark:border-indigo-700";
    pub const BADGE_WRAPPER: &'static str =
        "ml-2 transition-transform duration-200 hover:scale-105 active:scale-95";

    pub const ICON: &'static str = "material-symbols-outlined";

    pub const ACCOUNT: &'static str = "flex items-center text-sm rounded-full transition-transform duration-200 hover:scale-105";
    pub const ACCOUNT_TEXT: &'static str = "mr-2 font-medium text-gray-700 dark:text-gray-200";
    pub const ACCOUNT_ICON: &'static str = "material-symbols-outlined align-middle mr-1 text-base";

    pub const SIGN_OUT: &'static str = "flex items-center gap-2 px-4 py-2 rounded-lg bg-indigo-600 text-white text-sm font-medium transition-all duration-200 hover:scale-105 hover:shadow-[0_4px_14px_rgba(99,102,241,0.3)] active:scale-95 active:shadow-[0_2px_8px_rgba(99,102,241,0.2)]";
}
