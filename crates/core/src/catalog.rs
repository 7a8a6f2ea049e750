//! The fixed step sequences and mock datasets the wizard renders.
//!
//! Everything here is a placeholder by construction: there is no scoring
//! algorithm or generation rule behind any entry, and the sequences never
//! change at runtime. Step identity is the array position.

use crate::model::{
    EvaluationMetric, EvaluationRecord, ExampleIdea, Impact, MetricCategory, OverviewCard,
    PlanningSection, Suggestion, SuggestionCategory,
};

/// The 20-step checklist walked by the evaluation modal: ten backend
/// metrics followed by ten frontend metrics.
pub static EVALUATION_METRICS: [EvaluationMetric; 20] = [
    EvaluationMetric::new(
        "response-time",
        "Response Time (Latency)",
        "Time taken for a request to receive a response",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "throughput",
        "Throughput (Requests per Second)",
        "Number of requests handled per second",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "error-rate",
        "Error Rate",
        "Percentage of failed requests",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "cpu-utilization",
        "CPU Utilization",
        "Percentage of CPU resources used",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "memory-usage",
        "Memory Usage",
        "Amount of RAM consumed by the backend",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "database-performance",
        "Database Query Performance",
        "Time taken for database queries to execute",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "cache-hit-ratio",
        "Cache Hit Ratio",
        "Percentage of requests served from cache vs. database",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "concurrency",
        "Concurrency & Scalability",
        "Number of concurrent users the system can handle",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "availability",
        "Availability (Uptime)",
        "Percentage of time the backend is operational",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "queue-length",
        "Queue Length",
        "Number of pending requests in processing queues",
        MetricCategory::Backend,
    ),
    EvaluationMetric::new(
        "visual-consistency",
        "Visual Consistency",
        "Ensuring colors, fonts, and UI elements follow a unified design system",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "pixel-perfection",
        "Pixel Perfection",
        "Checking that elements align correctly and match design mockups",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "typography",
        "Typography Readability",
        "Evaluating font sizes, line spacing, and contrast for readability",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "color-contrast",
        "Color Contrast Ratio",
        "Ensuring text and background colors meet accessibility standards",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "animation",
        "Animation Smoothness",
        "Measuring FPS for smooth UI transitions",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "image-quality",
        "Image Quality & Optimization",
        "Ensuring images are high-quality without excessive file size",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "responsiveness",
        "Responsiveness",
        "Checking UI adaptability across different screen sizes and resolutions",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "whitespace",
        "White Space Balance",
        "Ensuring proper spacing and padding for a clean layout",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "button-clickability",
        "Button & Link Clickability",
        "Checking if buttons have proper sizes and hover effects for usability",
        MetricCategory::Frontend,
    ),
    EvaluationMetric::new(
        "theme-support",
        "Dark Mode & Theme Support",
        "Evaluating if themes adjust properly without visual glitches",
        MetricCategory::Frontend,
    ),
];

/// Backend boxes on the overview diagram, revealed top row first.
pub static BACKEND_CARDS: [OverviewCard; 3] = [
    OverviewCard::new(
        "API Gateway",
        "Handles all incoming requests and routes them to appropriate services",
    ),
    OverviewCard::new(
        "Authentication Service",
        "Manages user authentication and authorization",
    ),
    OverviewCard::new(
        "Data Processing Service",
        "Processes and transforms data for frontend consumption",
    ),
];

/// Frontend boxes on the overview diagram.
pub static FRONTEND_CARDS: [OverviewCard; 5] = [
    OverviewCard::new("User Dashboard", "Main user interface with overview"),
    OverviewCard::new("Profile Management", "User profile settings and preferences"),
    OverviewCard::new("Data Visualization", "Charts and graphs for data analysis"),
    OverviewCard::new("Content Management", "Interface for managing content"),
    OverviewCard::new("Settings Panel", "Application configuration options"),
];

/// The 15 canned result blocks shown after an evaluation run.
pub static EVALUATION_RECORDS: [EvaluationRecord; 15] = [
    EvaluationRecord::new(1, 2, 5, 96.9, 95.6,
        "Robust backend performance is demonstrated by rapid response times and efficient data processing. The frontend UI shows excellent visual consistency and responsive design adaptability across devices."),
    EvaluationRecord::new(2, 1, 3, 94.2, 92.8,
        "The authentication service performs with high reliability. UI animations are smooth with consistent frame rates, providing an engaging user experience."),
    EvaluationRecord::new(3, 3, 1, 91.7, 89.4,
        "Data processing service shows excellent throughput with minimal latency. Frontend typography is highly readable with excellent contrast ratios."),
    EvaluationRecord::new(4, 2, 4, 93.5, 90.2,
        "Backend cache hit ratio optimization results in faster data retrieval. Frontend image quality is optimized for both performance and visual clarity."),
    EvaluationRecord::new(5, 1, 2, 97.2, 88.9,
        "API gateway shows excellent request routing efficiency. The pixel precision of UI elements meets design specifications with minimal variance."),
    EvaluationRecord::new(6, 3, 3, 89.8, 93.7,
        "Backend concurrency handling shows good scalability under load. Frontend color contrast ratios exceed accessibility standards across all UI elements."),
    EvaluationRecord::new(7, 1, 1, 95.3, 96.1,
        "Authentication service demonstrates excellent security measures. Frontend visual consistency creates a cohesive experience across all application modules."),
    EvaluationRecord::new(8, 2, 2, 92.6, 91.9,
        "Backend memory usage is optimized for resource efficiency. White space balance in the UI creates clear visual hierarchy and comfortable reading experience."),
    EvaluationRecord::new(9, 3, 5, 90.4, 94.5,
        "Data processing service handles complex transformations efficiently. Dark mode implementation shows excellent contrast and readability in all lighting conditions."),
    EvaluationRecord::new(10, 1, 4, 98.1, 90.8,
        "API gateway demonstrates excellent error handling and recovery. Button and link designs provide clear affordances with appropriate hover states."),
    EvaluationRecord::new(11, 2, 1, 93.9, 92.3,
        "Backend CPU utilization remains stable even under heavy workloads. Frontend typography selection enhances readability across different content types."),
    EvaluationRecord::new(12, 3, 4, 91.2, 89.7,
        "Data processing service maintains high availability with minimal downtime. Responsive design adapts seamlessly across device sizes maintaining functional integrity."),
    EvaluationRecord::new(13, 1, 5, 96.4, 93.2,
        "Authentication service handles concurrent authentication requests efficiently. Theme support implementation allows seamless switching with no visual glitches."),
    EvaluationRecord::new(14, 2, 3, 94.7, 95.0,
        "Backend queue management prevents bottlenecks during traffic spikes. Animation timing and easing functions create a polished, professional feel."),
    EvaluationRecord::new(15, 3, 2, 92.8, 91.5,
        "Data processing service shows consistent performance across varied data types. UI component spacing maintains visual harmony throughout the application."),
];

/// Starter ideas offered under the prompt textarea.
pub static EXAMPLE_IDEAS: [ExampleIdea; 3] = [
    ExampleIdea::new(
        "I want to build a task management app with real-time collaboration",
        "\u{2713}",
    ),
    ExampleIdea::new(
        "Create a social platform for book lovers to share reviews and recommendations",
        "\u{2665}",
    ),
    ExampleIdea::new(
        "Design an e-commerce platform specialized in handmade crafts",
        "\u{2605}",
    ),
];

/// Accordion sections on the planning screen.
pub static PLANNING_SECTIONS: [PlanningSection; 5] = [
    PlanningSection::new(
        "scope",
        "Project Scope",
        "Define the boundaries and objectives of the project...",
    ),
    PlanningSection::new(
        "feasibility",
        "Feasibility Analysis",
        "Technical and business feasibility assessment...",
    ),
    PlanningSection::new(
        "risks",
        "Risk Assessment",
        "Identify potential risks and mitigation strategies...",
    ),
    PlanningSection::new(
        "timeline",
        "Timeline Estimation",
        "Project phases and estimated completion dates...",
    ),
    PlanningSection::new(
        "resources",
        "Required Resources",
        "Team composition and technical requirements...",
    ),
];

/// The canned recommendation pool the suggester draws from.
pub static SUGGESTIONS: [Suggestion; 10] = [
    Suggestion::new(
        "Other Accessories Based on YouTube Trends",
        "Identify popular accessories to increase engagement and sales.",
        "Competitors like Speed and KSI are doing this effectively.",
        SuggestionCategory::Product,
        Impact::High,
    ),
    Suggestion::new(
        "Intelligent Chatbot for Personalized Engagement",
        "Real-time, tailored assistance to enhance satisfaction and sales.",
        "AI chatbots offer 24/7 interaction and operational efficiency.",
        SuggestionCategory::Tech,
        Impact::Medium,
    ),
    Suggestion::new(
        "Switch to AWS for Cost Optimization",
        "Reduced costs and better scalability.",
        "AWS offers flexible pricing and high performance.",
        SuggestionCategory::Tech,
        Impact::High,
    ),
    Suggestion::new(
        "Launch an SEO Marketing Campaign",
        "Improved search rankings, traffic, and reach.",
        "SEO boosts visibility and organic traffic.",
        SuggestionCategory::Marketing,
        Impact::High,
    ),
    Suggestion::new(
        "AI-Powered Product Recommendation Engine",
        "Increases conversions with personalized product suggestions.",
        "AI analyzes behavior to enhance customer experience.",
        SuggestionCategory::Tech,
        Impact::Medium,
    ),
    Suggestion::new(
        "Introduce Ripped Jeans as a New Product Line",
        "Tap into current fashion trends for Gen Z appeal.",
        "Ripped jeans are trending among youth.",
        SuggestionCategory::Product,
        Impact::Medium,
    ),
    Suggestion::new(
        "Integrate Reviews & UGC for Social Proof",
        "Boosts trust and conversion through customer authenticity.",
        "UGC builds credibility and trust.",
        SuggestionCategory::Marketing,
        Impact::Medium,
    ),
    Suggestion::new(
        "AR Try-On and Product Preview",
        "Enhances visualization and reduces returns.",
        "AR lets users interact with products virtually.",
        SuggestionCategory::Tech,
        Impact::High,
    ),
    Suggestion::new(
        "Seasonal and Themed Product Launches",
        "Drives engagement and revenue during key times.",
        "Seasonal trends align with consumer buying habits.",
        SuggestionCategory::Product,
        Impact::Medium,
    ),
    Suggestion::new(
        "Monthly Cooking Subscription Box",
        "Loyalty, recurring revenue, and branded experience.",
        "Subscriptions increase retention and excitement.",
        SuggestionCategory::Product,
        Impact::High,
    ),
];

/// Canned implementation steps shown in the suggestion detail modal.
pub static IMPLEMENTATION_STEPS: [&str; 5] = [
    "Research current market trends and competition",
    "Develop a detailed implementation roadmap",
    "Allocate resources and assign responsibilities",
    "Set key performance indicators for measuring success",
    "Create a timeline with milestones for deployment",
];

/// Steps of the top-level wizard indicator.
pub static WIZARD_STEPS: [(&str, &str); 4] = [
    ("Idea", "Share your vision"),
    ("Planning", "Scope & timeline"),
    ("Requirements", "Detailed analysis"),
    ("Design", "System architecture"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_catalog_is_backend_then_frontend() {
        assert_eq!(EVALUATION_METRICS.len(), 20);
        for metric in &EVALUATION_METRICS[..10] {
            assert_eq!(metric.category(), MetricCategory::Backend);
        }
        for metric in &EVALUATION_METRICS[10..] {
            assert_eq!(metric.category(), MetricCategory::Frontend);
        }
    }

    #[test]
    fn metric_ids_are_unique() {
        for (i, a) in EVALUATION_METRICS.iter().enumerate() {
            for b in &EVALUATION_METRICS[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn records_reference_existing_overview_cards() {
        for record in &EVALUATION_RECORDS {
            assert!((1..=BACKEND_CARDS.len() as u32).contains(&record.backend()));
            assert!((1..=FRONTEND_CARDS.len() as u32).contains(&record.frontend()));
        }
    }
}
