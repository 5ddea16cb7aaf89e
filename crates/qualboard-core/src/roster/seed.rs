//! Embedded fallback dataset.
//!
//! Used verbatim whenever live ingestion fails, in authored order (the
//! recency sort applies only to sheet data).

use crate::models::MemberRecord;

struct SeedMember {
    id: &'static str,
    name: &'static str,
    city: &'static str,
    promo: &'static str,
    reward: &'static str,
    qualified_at: &'static str,
    rank: &'static str,
    photo: Option<&'static str>,
}

const SEED_MEMBERS: &[SeedMember] = &[
    SeedMember {
        id: "MTS-001",
        name: "Aulia Rahman",
        city: "Yogyakarta",
        promo: "Promo Pribadi",
        reward: "Termos Mumtas",
        qualified_at: "2025-09-10",
        rank: "Manager",
        photo: Some("https://placehold.co/80x80/a3b18a/2f4f3a?text=AR"),
    },
    SeedMember {
        id: "MTS-002",
        name: "Dewi Kartika",
        city: "Sleman",
        promo: "Promo Pribadi",
        reward: "IDR 1,5 Juta",
        qualified_at: "2025-10-11",
        rank: "Manager",
        photo: None,
    },
    SeedMember {
        id: "MTS-003",
        name: "Rizky Maulana",
        city: "Bantul",
        promo: "Promo Pribadi",
        reward: "IDR 2,5 Juta",
        qualified_at: "2025-10-05",
        rank: "Manager",
        photo: None,
    },
    SeedMember {
        id: "MTS-004",
        name: "Nadia Syifa",
        city: "Magelang",
        promo: "Promo Peringkat",
        reward: "LM 2 Juta",
        qualified_at: "2025-10-09",
        rank: "Gold Manager",
        photo: None,
    },
    SeedMember {
        id: "MTS-005",
        name: "Fajar Hidayat",
        city: "Kulon Progo",
        promo: "Promo Peringkat",
        reward: "HP 4 Juta",
        qualified_at: "2025-10-11",
        rank: "Gold Manager",
        photo: None,
    },
    SeedMember {
        id: "MTS-006",
        name: "Siti Nurhaliza",
        city: "Gunungkidul",
        promo: "Promo Peringkat",
        reward: "iPad 7,5 Juta",
        qualified_at: "2025-09-12",
        rank: "Diamond Manager",
        photo: None,
    },
    SeedMember {
        id: "MTS-010",
        name: "Farah Azzahra",
        city: "Bantul",
        promo: "Loyal Manager",
        reward: "LM 10 Juta",
        qualified_at: "2025-09-04",
        rank: "Crown Manager",
        photo: None,
    },
];

/// The fallback members, freshly allocated so every failed load gets an
/// independent roster value.
pub fn seed_members() -> Vec<MemberRecord> {
    SEED_MEMBERS
        .iter()
        .map(|s| MemberRecord {
            id: s.id.to_string(),
            name: s.name.to_string(),
            city: s.city.to_string(),
            promo: s.promo.to_string(),
            reward: s.reward.to_string(),
            qualified_at: s.qualified_at.to_string(),
            rank: s.rank.to_string(),
            photo: s.photo.map(str::to_string),
        })
        .collect()
}
