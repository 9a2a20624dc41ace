/// 单个评分维度：名称 + 打分规则描述
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Factor {
    pub name: &'static str,
    pub rubric: &'static str,
}

/// 固定顺序的九个评分维度，prompt 按此顺序枚举
pub static FACTORS: &[Factor] = &[
    Factor {
        name: "riskScore",
        rubric: "Overall business risk, from 1 (very risky: heavy competition, thin margins, high return rates) to 10 (very safe).",
    },
    Factor {
        name: "seasonality",
        rubric: "Demand stability across the year, from 1 (sells only in a short season) to 10 (steady year-round demand).",
    },
    Factor {
        name: "differentiation",
        rubric: "Room to stand out from existing listings, from 1 (identical commodity products) to 10 (clear, defensible improvements are possible).",
    },
    Factor {
        name: "audienceSize",
        rubric: "Size of the reachable customer base, from 1 (tiny niche) to 10 (mass-market appeal).",
    },
    Factor {
        name: "marketingAngle",
        rubric: "Strength of a compelling marketing story or visual hook, from 1 (nothing to say) to 10 (instantly shareable).",
    },
    Factor {
        name: "urgency",
        rubric: "How strongly the product solves a pressing problem, from 1 (nice-to-have) to 10 (customers need it now).",
    },
    Factor {
        name: "longevity",
        rubric: "Expected lifespan of demand, from 1 (passing fad) to 10 (evergreen product category).",
    },
    Factor {
        name: "brandingPotential",
        rubric: "Potential to build a recognizable brand and product line, from 1 (generic, unbrandable) to 10 (strong brand and expansion potential).",
    },
    Factor {
        name: "complianceRisk",
        rubric: "Regulatory and certification burden, from 1 (heavy regulation, safety testing, or restricted category) to 10 (no special compliance needs).",
    },
];

pub fn factor_names() -> impl Iterator<Item = &'static str> {
    FACTORS.iter().map(|f| f.name)
}
