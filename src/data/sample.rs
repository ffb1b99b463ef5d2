//! Reference dataset

use super::{
    AdoptionSlice, DashboardData, EfficiencySlice, EngagementSlice, OverviewSlice, QualitySlice,
    RevenueSlice, RoiSlice,
};
use crate::format::{currency, thousands};
use crate::model::{
    BacklogItem, CategoryShare, HighlightItem, Incident, KeyFigure, MetricPoint, SlaImprovement,
    TableRow, VendorReplacement, WorkflowEntry,
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn row(cells: &[&str]) -> TableRow {
    cells.iter().map(|c| c.to_string()).collect()
}

fn highlight(label: &str, value: impl Into<String>, description: &str) -> HighlightItem {
    HighlightItem::new(label, value, description)
}

pub(super) fn build() -> DashboardData {
    DashboardData {
        periods: MONTHS.iter().map(|m| m.to_string()).collect(),
        overview: OverviewSlice {
            automated_share: "46%".to_string(),
            assisted_share: "37%".to_string(),
            top_roi_case: "Finance Reconciliation".to_string(),
        },
        adoption: adoption(),
        efficiency: efficiency(),
        revenue: revenue(),
        roi: roi(),
        quality: quality(),
        engagement: engagement(),
    }
}

fn adoption() -> AdoptionSlice {
    let trend = MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let i = i as f64;
            MetricPoint::new(*month)
                .field("workflows", 80.0 + i * 8.0 + (i % 3.0) * 5.0)
                .field("agent_mau", 1200.0 + i * 120.0 + (i % 4.0) * 60.0)
        })
        .collect();

    let catalog = [
        ("Invoice Reconciliation Bot", "Finance", "Live", 3.8),
        ("Sales Playbook Agent", "Sales", "Live", 3.1),
        ("Knowledge Answer Agent", "Support", "Live", 2.7),
        ("Menu Optimization", "Operations", "Pilot", 2.5),
        ("Supply Enrichment", "Procurement", "Pilot", 2.2),
    ]
    .into_iter()
    .map(|(name, owner, status, roi)| WorkflowEntry {
        name: name.to_string(),
        owner: owner.to_string(),
        status: status.to_string(),
        roi,
    })
    .collect();

    let backlog = [
        ("Contract Review", "GenAI + Approval", "Legal", "High", "Queued"),
        ("Field Ticket Triage", "Routing Agent", "Ops", "Med", "Design"),
        ("Menu Optimization", "MenuAI", "Ops", "High", "Pilot"),
        ("Supply Enrichment", "Pegasus", "Procurement", "Med", "Backlog"),
        ("Collections Copilot", "Agentic", "Finance", "High", "Discovery"),
    ]
    .into_iter()
    .map(|(name, kind, owner, impact, status)| BacklogItem {
        name: name.to_string(),
        kind: kind.to_string(),
        owner: owner.to_string(),
        impact: impact.to_string(),
        status: status.to_string(),
    })
    .collect();

    AdoptionSlice {
        trend,
        coverage: vec![
            KeyFigure::new("Eligible Workflows Automated", "46%"),
            KeyFigure::new("Employees Assisted by AI", "37%"),
            KeyFigure::new("Active Agents", "128"),
            KeyFigure::new("Automated Sites", "64%"),
        ],
        catalog,
        backlog,
        business_units: ["Finance", "Sales", "Support", "Ops", "Procurement", "HR", "IT"]
            .iter()
            .map(|u| u.to_string())
            .collect(),
        highlights: vec![
            highlight(
                "Automation Coverage",
                "46%",
                "% of eligible workflows automated vs. manual baseline",
            ),
            highlight(
                "Agent Utilization",
                "37%",
                "% of employees working with AI agents each month",
            ),
            highlight(
                "Collaboration Index",
                "2.4 : 1",
                "Human-to-agent interaction ratio across automated workflows",
            ),
            highlight(
                "Training Completion",
                "72%",
                "Portion of workforce completing AI enablement programs",
            ),
        ],
    }
}

fn efficiency() -> EfficiencySlice {
    let savings = [
        ("Q1", 18200.0, 540000.0),
        ("Q2", 22400.0, 690000.0),
        ("Q3", 25500.0, 780000.0),
        ("Q4", 30100.0, 940000.0),
    ]
    .into_iter()
    .map(|(q, hours, cost)| MetricPoint::new(q).field("hours", hours).field("cost", cost))
    .collect();

    let cost_per_workflow = [
        ("Contract Review", 4.2, 9.6),
        ("Invoice Recon", 2.1, 6.4),
        ("Ticket Triage", 1.8, 3.9),
    ]
    .into_iter()
    .map(|(label, ai, manual)| MetricPoint::new(label).field("ai", ai).field("manual", manual))
    .collect();

    let vendors = [
        ("Legacy OCR Suite", 22000.0, "Doc AI + Workflow", "Complete"),
        ("RPA Licenses (10)", 18000.0, "Agentic Orchestration", "Phasing"),
        ("Outbound Dialer", 9000.0, "AI Outreach", "Planned"),
    ]
    .into_iter()
    .map(|(tool, monthly_cost, replaced_by, status)| VendorReplacement {
        tool: tool.to_string(),
        monthly_cost,
        replaced_by: replaced_by.to_string(),
        status: status.to_string(),
    })
    .collect();

    let benchmarks = [
        ("Corporate Services", 8200.0, 240000.0, "52%"),
        ("Healthcare", 6200.0, 190000.0, "44%"),
        ("Universities", 4800.0, 155000.0, "38%"),
        ("ENR", 3900.0, 120000.0, "31%"),
    ]
    .into_iter()
    .map(|(division, hours, cost, coverage)| {
        vec![
            division.to_string(),
            thousands(hours),
            currency(cost),
            coverage.to_string(),
        ]
    })
    .collect();

    let sla = [
        ("Ticket Resolution", "3h 00m", "0h 10m", "↓ 94%"),
        ("Invoice Approval", "1h 45m", "0h 12m", "↓ 89%"),
        ("Incident Dispatch", "2h 20m", "0h 14m", "↓ 90%"),
    ]
    .into_iter()
    .map(|(process, manual, agent, improvement)| SlaImprovement {
        process: process.to_string(),
        manual: manual.to_string(),
        agent: agent.to_string(),
        improvement: improvement.to_string(),
    })
    .collect();

    EfficiencySlice {
        savings,
        cost_per_workflow,
        vendors,
        benchmarks,
        sla,
        highlights: vec![
            highlight(
                "Hours Saved (YTD)",
                thousands(30100.0),
                "Cumulative labor hours reinvested through automation",
            ),
            highlight(
                "Cost Savings",
                currency(940000.0),
                "Operational spend avoided in the last quarter",
            ),
            highlight(
                "Vendor Replacement",
                currency(49000.0),
                "Monthly spend displaced by retiring legacy tools",
            ),
            highlight(
                "Energy Savings",
                "18%",
                "Reduction in compute & storage consumption from optimized models",
            ),
        ],
    }
}

fn revenue() -> RevenueSlice {
    let uplift = MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            MetricPoint::new(*month)
                .field("uplift", 3.0 + i as f64 * 0.4)
                .field("conversion", 12.0 + (i % 5) as f64)
        })
        .collect();

    let cross_sell = [("SMB", 140.0, 60.0), ("Mid", 220.0, 110.0), ("Enterprise", 260.0, 140.0)]
        .into_iter()
        .map(|(seg, up, cross)| {
            MetricPoint::new(seg)
                .field("upsell", up)
                .field("cross_sell", cross)
        })
        .collect();

    RevenueSlice {
        mix: vec![
            CategoryShare::new("Upsell Reco", 38.0),
            CategoryShare::new("Lead Scoring", 22.0),
            CategoryShare::new("Churn Save", 18.0),
            CategoryShare::new("Pricing", 12.0),
            CategoryShare::new("Other", 10.0),
        ],
        uplift,
        cross_sell,
        pipeline: vec![
            row(&["AI-Enabled Menu Planning", "Discovery", "Ops", "$180k"]),
            row(&["Proactive Churn Save", "Pilot", "Success", "$240k"]),
            row(&["Dynamic Pricing", "Design", "Finance", "$320k"]),
        ],
        highlights: vec![
            highlight("AI-Enabled ARR", "$2.1M", "Run-rate revenue from AI-driven offerings"),
            highlight(
                "Sales Uplift",
                "+6.8%",
                "Increase in conversion from predictive targeting",
            ),
            highlight(
                "Innovation Pipeline",
                "7 initiatives",
                "Emerging use cases progressing toward commercialization",
            ),
            highlight(
                "Market Expansion",
                "3 regions",
                "New markets entered with AI-supported services",
            ),
        ],
    }
}

fn roi() -> RoiSlice {
    let timeline = [
        ("Q1", 260000.0, 540000.0),
        ("Q2", 280000.0, 690000.0),
        ("Q3", 310000.0, 780000.0),
        ("Q4", 330000.0, 940000.0),
    ]
    .into_iter()
    .map(|(q, invest, benefit)| {
        MetricPoint::new(q)
            .field("invest", invest)
            .field("benefit", benefit)
    })
    .collect();

    RoiSlice {
        blended: "2.9x".to_string(),
        timeline,
        use_cases: vec![
            row(&["Invoice Reconciliation", "Finance", "3.8x", "Live"]),
            row(&["Sales Playbook Agent", "Sales", "3.1x", "Live"]),
            row(&["Knowledge Answer Agent", "Support", "2.7x", "Live"]),
            row(&["Menu Optimization", "Ops", "2.5x", "Pilot"]),
            row(&["Supply Enrichment", "Procurement", "2.2x", "Pilot"]),
        ],
        summary: vec![
            KeyFigure::new("Payback (blended)", "7.5 months"),
            KeyFigure::new("Top ROI Use Case", "Invoice Reconciliation"),
            KeyFigure::new("Vendor Cost Offset", currency(420000.0)),
            KeyFigure::new("Internal Effort Saved", format!("{} hrs", thousands(30100.0))),
            KeyFigure::new("ROAI (cumulative)", "2.9x"),
        ],
        scenarios: vec![
            vec!["Base".into(), "+0%".into(), currency(940000.0), "7.5".into()],
            vec!["Scale Agents".into(), "+20%".into(), currency(1120000.0), "6.4".into()],
            vec!["Automate Backlog".into(), "+35%".into(), currency(1300000.0), "5.7".into()],
        ],
        highlights: vec![
            highlight("ROAI", "2.9x", "Blended return on AI investment across the portfolio"),
            highlight("Payback Period", "7.5 mo", "Time to break even on enterprise AI spend"),
            highlight(
                "Scenario Upside",
                "+38%",
                "Modeled value lift when backlog automations go live",
            ),
            highlight(
                "Board-Ready Cases",
                "11",
                "Use cases with audited ROI packages for governance",
            ),
        ],
    }
}

fn quality() -> QualitySlice {
    let readings = [
        (92.0, 7.0, 0.6),
        (93.0, 6.0, 0.4),
        (93.5, 6.0, 0.5),
        (94.0, 5.0, 0.3),
        (94.5, 5.0, 0.4),
        (95.0, 4.0, 0.2),
        (95.2, 4.0, 0.3),
        (95.4, 3.0, 0.2),
        (95.7, 3.0, 0.2),
        (96.0, 3.0, 0.3),
        (96.2, 2.0, 0.2),
        (96.5, 2.0, 0.2),
    ];
    let series = MONTHS
        .iter()
        .zip(readings)
        .map(|(month, (accuracy, incidents, drift))| {
            MetricPoint::new(*month)
                .field("accuracy", accuracy)
                .field("incidents", incidents)
                .field("drift", drift)
        })
        .collect();

    let incidents = [
        ("INC-1042", "Med", "Support", "Wrong article cited", "Resolved <4h"),
        ("INC-1049", "Low", "Sales", "Duplicate suggestion", "Resolved <24h"),
        ("INC-1054", "High", "Finance", "Miscalculation flagged", "Under review"),
    ]
    .into_iter()
    .map(|(id, severity, area, description, sla)| Incident {
        id: id.to_string(),
        severity: severity.to_string(),
        area: area.to_string(),
        description: description.to_string(),
        sla: sla.to_string(),
    })
    .collect();

    QualitySlice {
        series,
        compliance: vec![
            row(&["GDPR/CCPA Alignment", "On track", "PII minimization, DSRs automated"]),
            row(&["AI Policy Coverage", "96%", "Exceptions under review"]),
            row(&["Audit Trails", "Enabled", "All critical workflows"]),
        ],
        incidents,
        highlights: vec![
            highlight(
                "Workflow Accuracy",
                "96.5%",
                "Outputs meeting quality thresholds in December",
            ),
            highlight(
                "Compliance Coverage",
                "96%",
                "Policies and controls aligned with AI governance standards",
            ),
            highlight("Incidents (30d)", "3", "AI-related events escalated for human review"),
            highlight("Explainability", "82%", "Automations equipped with transparency tooling"),
        ],
    }
}

fn engagement() -> EngagementSlice {
    let visits = [120.0, 138.0, 160.0, 172.0, 188.0, 205.0, 220.0, 238.0, 251.0, 268.0, 281.0, 295.0];
    let trainings = [320.0, 410.0, 480.0, 520.0, 540.0, 580.0, 630.0, 670.0, 710.0, 760.0, 800.0, 840.0];
    let activity = MONTHS
        .iter()
        .zip(visits.iter().zip(trainings.iter()))
        .map(|(month, (v, t))| {
            MetricPoint::new(*month)
                .field("exec_visits", *v)
                .field("trainings", *t)
        })
        .collect();

    EngagementSlice {
        activity,
        satisfaction: vec![
            row(&["Finance", "4.5/5", "+56"]),
            row(&["Sales", "4.3/5", "+48"]),
            row(&["Support", "4.2/5", "+44"]),
            row(&["Ops", "4.1/5", "+42"]),
        ],
        highlights: vec![
            highlight(
                "Executive Sessions",
                "295",
                "Leadership interactions with the control center YTD",
            ),
            highlight(
                "Adoption Champions",
                "58",
                "Recognized teams coaching peers on AI workflows",
            ),
            highlight(
                "Feedback Loop",
                "214 inputs",
                "Ideas and issues submitted via change management hub",
            ),
            highlight("Employee NPS", "+48", "Net promoter score for AI-enabled ways of working"),
        ],
    }
}
