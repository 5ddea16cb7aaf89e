//! Console rendering of the roster, facets, and member cards.
//!
//! Pure string building over core values; printing happens in `main`.

use qualboard_core::utils::format::month_label;
use qualboard_core::{Facets, FilterSpec, MemberRecord, QueryOutput, Roster, RosterSource, ALL_KEY};

/// Info bar: data source, last sync, and the load error if any.
pub fn info_bar(roster: &Roster) -> String {
    let source = match roster.source {
        RosterSource::Sheet => "Google Sheet (live)",
        RosterSource::Seed => "Seed lokal",
    };
    let mut line = format!("Sumber data: {}", source);
    if roster.synced_at.is_some() {
        line.push_str(&format!(" • Sinkron: {}", roster.synced_display()));
    }
    if let Some(ref err) = roster.last_error {
        line.push_str(&format!(" (Error: {})", err));
    }
    line
}

/// Promo tabs with per-promo counts, the selected one marked.
pub fn promo_tabs(facets: &Facets, spec: &FilterSpec) -> String {
    facets
        .promo_list
        .iter()
        .map(|promo| {
            let marker = if *promo == spec.promo_key { "*" } else { "" };
            if promo == ALL_KEY {
                format!("[{}{}]", marker, promo)
            } else {
                let count = facets.total_per_promo.get(promo).copied().unwrap_or(0);
                format!("[{}{} ({})]", marker, promo, count)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Month dropdown values with their Indonesian labels.
pub fn month_options(facets: &Facets) -> String {
    facets
        .month_list
        .iter()
        .map(|key| month_label(key))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One text card per member, mirroring the web card layout.
pub fn member_card(m: &MemberRecord) -> String {
    let mut card = format!(
        "{}  {}  [{} {}]\n",
        m.id,
        m.name,
        m.rank_tier().icon(),
        m.rank.to_uppercase()
    );
    card.push_str(&format!("  {} • {}\n", m.city, m.promo));
    card.push_str(&format!(
        "  Dinyatakan memenuhi syarat pada {}\n",
        m.qualified_display()
    ));
    card.push_str(&format!("  Hadiah: {}", m.reward));
    if let Some(ref photo) = m.photo {
        card.push_str(&format!("\n  Foto: {}", photo));
    } else {
        card.push_str(&format!("\n  Avatar: {}", m.initials()));
    }
    card
}

/// Full console view for one query.
pub fn render(roster: &Roster, output: &QueryOutput, spec: &FilterSpec) -> String {
    let mut out = String::new();
    out.push_str(&info_bar(roster));
    out.push('\n');
    out.push_str(&format!("Promo : {}\n", promo_tabs(&output.facets, spec)));
    out.push_str(&format!("Bulan : {}\n", month_options(&output.facets)));
    out.push('\n');

    if output.members.is_empty() {
        out.push_str("Tidak ada member yang cocok.\n");
    } else {
        for m in &output.members {
            out.push_str(&member_card(m));
            out.push_str("\n\n");
        }
    }
    out.push_str(&format!("Total qualified: {}\n", output.members.len()));
    out
}
