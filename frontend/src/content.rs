//! Static copy for the landing page.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
    pub footnote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceMoment {
    pub heading: &'static str,
    pub copy: &'static str,
    /// CSS background for the panel tint.
    pub tint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePhase {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryFrame {
    pub label: &'static str,
    pub angle: &'static str,
    /// CSS background for the frame accent.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Atomically Smooth",
        description: "LiquidGlass seals at a molecular level to create an invisible layer that makes every surface feel impossibly smooth.",
        metric: "0.8nm",
        footnote: "average surface variance",
    },
    Feature {
        title: "Self-Healing Matrix",
        description: "Microfractures repair themselves in real-time thanks to a dynamic lattice that responds to pressure and temperature.",
        metric: "92%",
        footnote: "micro-scratch repair rate",
    },
    Feature {
        title: "Optical Purity",
        description: "A proprietary wave-guided coating refracts light back to your eyes for richer contrast and true-to-life color.",
        metric: "1.0003",
        footnote: "refractive index clarity",
    },
];

pub const EXPERIENCE_MOMENTS: [ExperienceMoment; 3] = [
    ExperienceMoment {
        heading: "Edge-to-Edge Immersion",
        copy: "Feel the display dissolve into the frame. LiquidGlass bends with every contour, making hardware disappear.",
        tint: "linear-gradient(135deg, rgba(56, 189, 248, 0.6), rgba(192, 132, 252, 0.5), transparent)",
    },
    ExperienceMoment {
        heading: "Intuitive Touch",
        copy: "We re-engineered touch response with a glass layer so thin it amplifies micro-gestures and reduces input lag.",
        tint: "linear-gradient(135deg, rgba(240, 171, 252, 0.5), rgba(236, 72, 153, 0.4), transparent)",
    },
    ExperienceMoment {
        heading: "Sonic Resonance",
        copy: "Vibration translates into pure, balanced sound. The film re-shapes acoustic waves and removes harsh edges.",
        tint: "linear-gradient(135deg, rgba(129, 140, 248, 0.6), rgba(147, 197, 253, 0.4), transparent)",
    },
];

pub const TIMELINE: [TimelinePhase; 3] = [
    TimelinePhase {
        title: "Phase 01 — Liquid State",
        summary: "Adaptive nano-particles realign while your device rests, constantly shaping to your touch.",
    },
    TimelinePhase {
        title: "Phase 02 — Photonic Fuse",
        summary: "Sub-pixel prisms harmonize light, bathing the interface in a subtle glow that follows your gaze.",
    },
    TimelinePhase {
        title: "Phase 03 — Living Surface",
        summary: "Temperature-aware molecules expand and contract to disperse heat, making the glass feel alive.",
    },
];

pub const GALLERY: [GalleryFrame; 3] = [
    GalleryFrame {
        label: "Atmospheric Depth",
        angle: "120°",
        accent: "linear-gradient(135deg, rgba(255, 255, 255, 0.3), rgba(125, 211, 252, 0.4), transparent)",
    },
    GalleryFrame {
        label: "Hovering Elements",
        angle: "48°",
        accent: "linear-gradient(135deg, rgba(255, 255, 255, 0.3), rgba(245, 208, 254, 0.4), transparent)",
    },
    GalleryFrame {
        label: "Ceramic Soft-Touch",
        angle: "12°",
        accent: "linear-gradient(135deg, rgba(255, 255, 255, 0.3), rgba(165, 180, 252, 0.4), transparent)",
    },
];

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        value: "8.2M",
        label: "Nanoscopic Points",
    },
    HeroStat {
        value: "0.2 μm",
        label: "Friction Layer",
    },
    HeroStat {
        value: "24/hr",
        label: "Self-Cycles",
    },
];

pub const CLOSING_TAGS: [&str; 4] = [
    "Liquid micro lattice",
    "Photonic alignment",
    "Adaptive tone",
    "Edge immersion",
];
