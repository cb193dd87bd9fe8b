//! Static site content shared across pages.

pub const SITE_NAME: &str = "DeltaFlow";
pub const SITE_TAGLINE: &str = "Synchronizing Intelligence with Business";
pub const SITE_EMAIL: &str = "contact@deltaflowlab.com";
pub const SITE_PHONE: &str = "+880 1726-131573";
pub const SITE_LOCATION: &str = "Dhaka, Bangladesh";

pub static SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://linkedin.com/company/deltaflow"),
    ("Twitter", "https://twitter.com/deltaflow"),
    ("GitHub", "https://github.com/deltaflow"),
];

pub struct Service {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub benefits: &'static [&'static str],
    pub use_cases: &'static [(&'static str, &'static str)],
    pub process: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static SERVICES: [Service; 4] = [
    Service {
        slug: "ai-development",
        name: "AI Product Development",
        tagline: "From Concept to Production AI",
        description: "We build custom AI products tailored to your business needs",
        long_description: "Our team of AI engineers designs, develops, and deploys production-ready AI systems. From NLP applications to computer vision solutions, we handle the entire development lifecycle.",
        benefits: &[
            "End-to-end AI product development",
            "Custom model training and fine-tuning",
            "Production deployment and MLOps",
            "Ongoing support and optimization",
        ],
        use_cases: &[
            ("Intelligent Document Processing", "Extract and process data from unstructured documents with 95%+ accuracy"),
            ("Conversational AI", "Custom chatbots and virtual assistants that understand context"),
            ("Predictive Analytics", "ML models that forecast trends and optimize decision-making"),
            ("Computer Vision Systems", "Automated quality control and visual inspection solutions"),
        ],
        process: &[
            "Discovery & Requirements",
            "Architecture Design",
            "Model Development",
            "Integration & Testing",
            "Deployment & Monitoring",
        ],
        technologies: &["Python", "TensorFlow", "PyTorch", "OpenAI API", "LangChain", "AWS SageMaker"],
    },
    Service {
        slug: "business-automation",
        name: "Business Process Automation",
        tagline: "Automate What Matters",
        description: "Intelligent automation that eliminates repetitive work",
        long_description: "We design and implement custom automation solutions that integrate AI with your existing workflows, reducing manual effort and improving accuracy.",
        benefits: &[
            "70% reduction in manual processing time",
            "Near-zero error rates",
            "24/7 automated operations",
            "Seamless integration with existing systems",
        ],
        use_cases: &[
            ("Invoice Processing", "Automated data extraction, validation, and entry"),
            ("Customer Support Automation", "AI-powered ticket routing and response generation"),
            ("Data Pipeline Automation", "Intelligent ETL processes with anomaly detection"),
            ("Automated Reporting Systems", "Self-generating business intelligence reports and dashboards"),
        ],
        process: &[
            "Process Analysis",
            "Automation Strategy",
            "Solution Development",
            "Integration",
            "Training & Handoff",
        ],
        technologies: &["Python", "FastAPI", "Celery", "Apache Airflow", "RPA Tools", "Custom APIs"],
    },
    Service {
        slug: "ai-consulting",
        name: "AI Strategy & Consulting",
        tagline: "Navigate Your AI Journey",
        description: "Expert guidance for successful AI implementation",
        long_description: "We help organizations develop AI strategies, assess feasibility, and create roadmaps for successful AI adoption.",
        benefits: &[
            "Clear AI roadmap aligned with business goals",
            "Feasibility assessment and ROI analysis",
            "Technology stack recommendations",
            "Implementation best practices",
        ],
        use_cases: &[
            ("AI Readiness Assessment", "Evaluate your data, infrastructure, and organizational readiness"),
            ("Custom AI Strategy", "Develop a phased implementation plan"),
            ("Technical Due Diligence", "Review AI vendors or evaluate acquisition targets"),
            ("AI Ethics & Compliance", "Ensuring your AI systems meet regulatory reliability standards"),
        ],
        process: &[
            "Current State Analysis",
            "Opportunity Identification",
            "Strategy Development",
            "Roadmap Creation",
            "Implementation Support",
        ],
        technologies: &["Business Analysis", "Technical Architecture", "Change Management"],
    },
    Service {
        slug: "generative-ai",
        name: "Generative AI Solutions",
        tagline: "Create Content at Scale",
        description: "Custom LLM agents and image generation pipelines",
        long_description: "We build tailored generative AI models that can create text, code, images, and audio, integrated seamlessly into your creative workflows.",
        benefits: &[
            "Custom LLM Fine-tuning",
            "Image & Video Generation",
            "Automated Content Pipelines",
            "Creative Audits",
        ],
        use_cases: &[
            ("Marketing Automation", "Generate on-brand copy and assets instantly"),
            ("Code Assistants", "Internal coding tools trained on your codebase"),
            ("Knowledge Retrieval", "Chat with your company's entire knowledge base"),
            ("Synthetic Data Creation", "Generating privacy-compliant datasets for model training"),
        ],
        process: &[
            "Data Collection",
            "Model Selection",
            "Fine-Tuning",
            "Application Building",
            "Deployment",
        ],
        technologies: &["OpenAI", "Midjourney", "Stable Diffusion", "LangChain", "Pinecone"],
    },
];

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

pub struct CaseStudy {
    pub title: &'static str,
    pub client: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [(&'static str, &'static str)],
    pub technologies: &'static [&'static str],
    pub quote: &'static str,
    pub quote_author: &'static str,
}

pub static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "Real-Time Fraud Detection System",
        client: "Major FinTech Company",
        industry: "Financial Services",
        challenge: "Client was losing $2M annually to fraudulent transactions with a 40% false positive rate causing customer friction.",
        solution: "Built a custom ML model using ensemble methods that analyzes transaction patterns in real-time with 99.5% accuracy.",
        results: &[
            ("99.5%", "Fraud Detection Accuracy"),
            ("$1.8M", "Annual Savings"),
            ("85%", "Reduction in False Positives"),
            ("<100ms", "Response Time"),
        ],
        technologies: &["Python", "TensorFlow", "Apache Kafka", "Redis", "AWS"],
        quote: "DeltaFlow's solution transformed our fraud prevention. The accuracy is incredible and our customers are much happier.",
        quote_author: "VP of Engineering, FinTech Client",
    },
    CaseStudy {
        title: "Medical Records Processing Automation",
        client: "Healthcare Provider Network",
        industry: "Healthcare",
        challenge: "Manual processing of patient records was taking 5-7 days per case, creating bottlenecks in patient care.",
        solution: "Developed an AI-powered document processing system with HIPAA-compliant infrastructure that extracts and validates medical data.",
        results: &[
            ("95%", "Processing Time Reduction"),
            ("4 hours", "Average Processing Time"),
            ("98%", "Data Accuracy"),
            ("HIPAA", "Compliant"),
        ],
        technologies: &["Python", "spaCy", "Azure ML", "FastAPI", "PostgreSQL"],
        quote: "This system has been transformative for our operations. Patients get faster service and our staff can focus on care.",
        quote_author: "Chief Medical Officer, Healthcare Network",
    },
    CaseStudy {
        title: "Personalized Product Recommendation Engine",
        client: "E-Commerce Retailer",
        industry: "Retail",
        challenge: "Generic product recommendations were resulting in low conversion rates and poor customer engagement.",
        solution: "Built a custom recommendation engine using collaborative filtering and deep learning that personalizes product suggestions in real-time.",
        results: &[
            ("42%", "Increase in Conversion Rate"),
            ("68%", "Higher Average Order Value"),
            ("3.2x", "Engagement Improvement"),
            ("Real-time", "Personalization"),
        ],
        technologies: &["Python", "PyTorch", "FastAPI", "Redis", "GCP"],
        quote: "The ROI was clear within the first month. Our customers love the personalized experience.",
        quote_author: "Head of Product, E-Commerce Client",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "DeltaFlow transformed our operations. The AI system they built processes in hours what used to take days.",
        author: "Sarah Chen",
        role: "CTO, TechCorp",
    },
    Testimonial {
        quote: "Working with DeltaFlow was seamless. They understood our business and delivered exactly what we needed.",
        author: "Michael Rodriguez",
        role: "VP Engineering, FinanceHub",
    },
    Testimonial {
        quote: "The ROI was clear within months. This is the AI partner every company needs.",
        author: "Emily Watson",
        role: "Head of Product, RetailCo",
    },
];

pub static CLIENTS: [&str; 6] = [
    "TechCorp",
    "FinanceHub",
    "RetailCo",
    "HealthPlus",
    "DataFlow",
    "AutoMate",
];

pub static STATS: [(&str, &str); 4] = [
    ("50+", "AI Projects Delivered"),
    ("25+", "Expert Engineers"),
    ("98%", "Client Satisfaction"),
    ("$10M+", "Client ROI Generated"),
];

pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub static COMPANY_VALUES: [CompanyValue; 4] = [
    CompanyValue {
        title: "Results-Driven",
        description: "We measure success by business outcomes, not technical metrics",
    },
    CompanyValue {
        title: "Quality First",
        description: "Every solution we build meets production-grade standards",
    },
    CompanyValue {
        title: "Partnership",
        description: "We're your long-term AI development partner, not just a vendor",
    },
    CompanyValue {
        title: "Innovation",
        description: "We stay at the forefront of AI technology and best practices",
    },
];

pub static COMPANY_STORY: [&str; 3] = [
    "DeltaFlow was founded with a simple mission: make enterprise-grade AI accessible to every business. We saw too many companies struggling to implement AI effectively - either lacking the technical expertise or getting stuck with generic solutions that didn't fit their needs.",
    "Our team of AI engineers and consultants brings deep expertise in machine learning, automation, and software development. We've built AI systems for Fortune 500 companies and fast-growing startups alike.",
    "Today, we're proud to be the AI development partner for companies across finance, healthcare, retail, and technology. Every project we take on is an opportunity to solve real problems with intelligent solutions.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_slugs_are_unique_and_resolvable() {
        for service in &SERVICES {
            assert_eq!(service_by_slug(service.slug).unwrap().name, service.name);
        }
        assert!(service_by_slug("no-such-service").is_none());
    }
}
