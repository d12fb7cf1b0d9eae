/// A skill rendered as a horizontal bar or circular gauge; `level` is a
/// percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBar {
    pub name: &'static str,
    pub level: u8,
    pub category: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftSkill {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const TECHNICAL_SKILLS: &[SkillBar] = &[
    SkillBar { name: "AutoCAD", level: 90, category: Some("Software") },
    SkillBar { name: "SketchUp", level: 85, category: Some("Software") },
    SkillBar { name: "Revit", level: 80, category: Some("Software") },
    SkillBar { name: "Adobe Photoshop", level: 88, category: Some("Software") },
    SkillBar { name: "Lumion / V-Ray", level: 78, category: Some("Rendering") },
    SkillBar { name: "Hand Drafting", level: 92, category: Some("Traditional") },
];

pub const DESIGN_SKILLS: &[SkillBar] = &[
    SkillBar { name: "Space Planning", level: 95, category: None },
    SkillBar { name: "Interior Design", level: 92, category: None },
    SkillBar { name: "Architectural Design", level: 88, category: None },
    SkillBar { name: "Material Selection", level: 90, category: None },
    SkillBar { name: "Lighting Design", level: 82, category: None },
    SkillBar { name: "Concept Development", level: 94, category: None },
];

pub const SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill { icon: "◈", label: "Client Communication" },
    SoftSkill { icon: "◇", label: "Project Management" },
    SoftSkill { icon: "◉", label: "Creative Problem Solving" },
    SoftSkill { icon: "◈", label: "Team Collaboration" },
    SoftSkill { icon: "◇", label: "Presentation Skills" },
    SoftSkill { icon: "◉", label: "Research & Analysis" },
];
