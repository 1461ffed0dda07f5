//! Shared class strings so cards, filters and the modal stay consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_gaming() -> &'static str {
    "inline-flex items-center justify-center gap-2 rounded-lg bg-gradient-primary px-4 py-2.5 text-sm font-semibold text-white gaming-glow transition-smooth hover:opacity-90"
}

pub fn btn_outline() -> &'static str {
    "inline-flex items-center justify-center gap-2 rounded-lg border border-slate-700 px-4 py-2.5 text-sm text-slate-300 transition-smooth hover:border-purple-500 hover:text-purple-200"
}

/// Category buttons: the active one uses the gaming style.
pub fn category_button(active: bool) -> &'static str {
    if active {
        btn_gaming()
    } else {
        btn_outline()
    }
}

pub fn rent_button(available: bool) -> &'static str {
    if available {
        "w-full inline-flex items-center justify-center gap-2 rounded-lg bg-gradient-primary px-4 py-2.5 text-sm font-semibold text-white gaming-glow transition-smooth hover:opacity-90"
    } else {
        "w-full inline-flex items-center justify-center gap-2 rounded-lg border border-slate-800 bg-slate-800/60 px-4 py-2.5 text-sm text-slate-500 cursor-not-allowed"
    }
}

// ============================================
// BADGES
// ============================================

pub fn badge_count() -> &'static str {
    "ml-1 rounded-full bg-slate-800 px-2 py-0.5 text-xs font-semibold text-slate-300"
}

pub fn badge_category() -> &'static str {
    "mt-1 inline-flex rounded-full bg-slate-800/80 px-2 py-0.5 text-xs font-medium capitalize text-slate-300"
}

// ============================================
// INPUT / PANEL STYLES
// ============================================

pub fn input_class() -> &'static str {
    "w-full rounded-lg border border-slate-700 bg-slate-950 py-2.5 pl-10 pr-4 text-sm text-slate-100 placeholder:text-slate-500 focus:border-purple-500 focus:outline-none"
}

pub fn select_class() -> &'static str {
    "mt-2 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2.5 text-sm text-slate-100 focus:border-purple-500 focus:outline-none"
}

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-800 bg-gradient-card p-5 shadow-sm"
}

pub fn card() -> &'static str {
    "group overflow-hidden rounded-xl border border-slate-800 bg-gradient-card transition-smooth hover:shadow-xl"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_muted() -> &'static str {
    "text-slate-400"
}

pub fn text_primary() -> &'static str {
    "text-purple-300"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase tracking-wide text-slate-500"
}
