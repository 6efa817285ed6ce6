//! Seed content for the in-memory stores. Stands in for a real database
//! until one is wired up behind the store contract.

use crate::models::{CaseStudy, Milestone, OngoingProject, Project, Review};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn milestone(title: &str, completed: bool) -> Milestone {
    Milestone {
        title: title.to_string(),
        completed,
    }
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Kenyan Rangelands Restoration".to_string(),
            description: "A community-driven initiative to restore degraded rangelands in Kenya."
                .to_string(),
            image: "https://images.unsplash.com/photo-1516026672322-bc52d61a55d5?q=80&w=600&auto=format&fit=crop".to_string(),
            tags: tags(&["Climate Tech", "Community Impact", "GIS"]),
            github: "https://github.com".to_string(),
            demo: "https://demo.com".to_string(),
            case_study: CaseStudy {
                challenge: "Over 50 hectares of Kenyan rangelands were degraded due to overgrazing and climate change.".to_string(),
                solution: "Implemented a community-based monitoring system using GIS technology and indigenous knowledge.".to_string(),
                outcome: "Restored 50+ hectares of rangelands, increasing biodiversity and improving livelihoods for local communities.".to_string(),
                tech_stack: tags(&["React", "Node.js", "GIS", "MongoDB"]),
            },
        },
        Project {
            id: 2,
            title: "Sustainable Agriculture Dashboard".to_string(),
            description: "Interactive dashboard for monitoring sustainable farming practices."
                .to_string(),
            image: "https://images.unsplash.com/photo-1605000797499-95a51c5269ae?q=80&w=600&auto=format&fit=crop".to_string(),
            tags: tags(&["Data Visualization", "Sustainability", "React"]),
            github: "https://github.com".to_string(),
            demo: "https://demo.com".to_string(),
            case_study: CaseStudy {
                challenge: "Farmers lacked tools to track and improve their sustainability metrics.".to_string(),
                solution: "Developed a real-time dashboard that visualizes key sustainability indicators.".to_string(),
                outcome: "Helped 200+ farmers reduce water usage by 30% and increase crop yields by 15%.".to_string(),
                tech_stack: tags(&["Next.js", "Tailwind CSS", "D3.js", "Supabase"]),
            },
        },
        Project {
            id: 3,
            title: "Food Supply Chain Tracker".to_string(),
            description: "Blockchain-based solution for transparent food supply chains.".to_string(),
            image: "https://images.unsplash.com/photo-1542838132-92c53300491e?q=80&w=600&auto=format&fit=crop".to_string(),
            tags: tags(&["Blockchain", "Supply Chain", "Food Security"]),
            github: "https://github.com".to_string(),
            demo: "https://demo.com".to_string(),
            case_study: CaseStudy {
                challenge: "Lack of transparency in food supply chains leading to waste and inefficiency.".to_string(),
                solution: "Built a blockchain solution to track food from farm to table with QR code integration.".to_string(),
                outcome: "Reduced food waste by 25% and increased consumer trust in participating brands.".to_string(),
                tech_stack: tags(&["Ethereum", "React", "Node.js", "QR Code API"]),
            },
        },
        Project {
            id: 4,
            title: "Community Seed Bank App".to_string(),
            description: "Mobile application for managing community seed banks and preserving biodiversity.".to_string(),
            image: "https://images.unsplash.com/photo-1620141925422-4eeaad36e9fe?q=80&w=600&auto=format&fit=crop".to_string(),
            tags: tags(&["Mobile App", "Biodiversity", "Community"]),
            github: "https://github.com".to_string(),
            demo: "https://demo.com".to_string(),
            case_study: CaseStudy {
                challenge: "Local seed varieties were being lost due to commercial agriculture expansion.".to_string(),
                solution: "Created a mobile app for cataloging, sharing, and preserving indigenous seeds.".to_string(),
                outcome: "Preserved 150+ local seed varieties and connected 15 community seed banks.".to_string(),
                tech_stack: tags(&["React Native", "Firebase", "Expo", "Google Maps API"]),
            },
        },
    ]
}

pub fn seed_ongoing_projects() -> Vec<OngoingProject> {
    vec![
        OngoingProject {
            id: 1,
            title: "STANDARD ECO FOUNDATION NGO Landing Page".to_string(),
            description: "A modern, responsive website for the STANDARD ECO FOUNDATION NGO to showcase their initiatives and impact.".to_string(),
            image: "https://images.unsplash.com/photo-1552664730-d307ca884978?q=80&w=600&auto=format&fit=crop".to_string(),
            tags: tags(&["Web Development", "NGO", "React"]),
            progress: 65,
            start_date: "2025-01-15".to_string(),
            estimated_completion: "2025-04-30".to_string(),
            milestones: vec![
                milestone("Design Approval", true),
                milestone("Frontend Development", true),
                milestone("CMS Integration", false),
                milestone("Content Population", false),
                milestone("Testing & Launch", false),
            ],
        },
        OngoingProject {
            id: 2,
            title: "Hardware App for Sales & Inventory Tracking".to_string(),
            description: "A comprehensive application for tracking daily sales, updating stock database, and monitoring cashflow from expenses to profits.".to_string(),
            image: "https://images.unsplash.com/photo-1556155092-490a1ba16284?q=80&w=600&auto=format&fit=crop".to_string(),
            tags: tags(&["Mobile App", "Inventory Management", "Cashflow"]),
            progress: 40,
            start_date: "2025-02-10".to_string(),
            estimated_completion: "2025-06-15".to_string(),
            milestones: vec![
                milestone("Requirements Analysis", true),
                milestone("Database Design", true),
                milestone("UI/UX Design", true),
                milestone("Core Functionality", false),
                milestone("Reporting Module", false),
                milestone("Testing & Deployment", false),
            ],
        },
    ]
}

pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            name: "Sarah Johnson".to_string(),
            role: "Project Manager".to_string(),
            company: Some("Climate Action Network".to_string()),
            image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=200&auto=format&fit=crop".to_string(),
            rating: 5,
            text: "Andrew's work on the rangeland restoration project exceeded our expectations. His ability to combine technical expertise with community engagement made a real difference in our project outcomes.".to_string(),
            date: "March 2025".to_string(),
            featured: true,
        },
        Review {
            id: 2,
            name: "Dr. Michael Ochieng".to_string(),
            role: "Director".to_string(),
            company: Some("East African Climate Institute".to_string()),
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=200&auto=format&fit=crop".to_string(),
            rating: 5,
            text: "I've collaborated with Andrew on several research initiatives. His deep understanding of both agricultural systems and climate science makes him an invaluable partner in our work.".to_string(),
            date: "February 2025".to_string(),
            featured: true,
        },
        Review {
            id: 3,
            name: "Amina Wangari".to_string(),
            role: "Community Leader".to_string(),
            company: Some("Narok County".to_string()),
            image: "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?q=80&w=200&auto=format&fit=crop".to_string(),
            rating: 5,
            text: "The training Andrew provided to our women's group has transformed how we approach sustainable farming. His respectful integration of our traditional knowledge with modern techniques was particularly appreciated.".to_string(),
            date: "January 2025".to_string(),
            featured: false,
        },
        Review {
            id: 4,
            name: "James Mwangi".to_string(),
            role: "CEO".to_string(),
            company: Some("AgriTech Solutions".to_string()),
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=200&auto=format&fit=crop".to_string(),
            rating: 4,
            text: "Working with Andrew on our mobile app development was a great experience. His insights into the needs of small-scale farmers helped us create a truly useful product.".to_string(),
            date: "December 2024".to_string(),
            featured: false,
        },
        Review {
            id: 5,
            name: "Emma Njeri".to_string(),
            role: "Program Officer".to_string(),
            company: Some("UN Environment".to_string()),
            image: "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?q=80&w=200&auto=format&fit=crop".to_string(),
            rating: 5,
            text: "Andrew's presentation at our climate resilience conference was one of the highlights. His ability to communicate complex ideas in accessible ways made a strong impression on all attendees.".to_string(),
            date: "November 2024".to_string(),
            featured: true,
        },
        Review {
            id: 6,
            name: "Daniel Kimani".to_string(),
            role: "Farmer".to_string(),
            company: Some("Nakuru County".to_string()),
            image: "https://images.unsplash.com/photo-1552058544-f2b08422138a?q=80&w=200&auto=format&fit=crop".to_string(),
            rating: 5,
            text: "The sustainable agriculture dashboard Andrew helped develop has changed how I manage my farm. I've reduced water usage by 25% while increasing yields. Truly transformative work!".to_string(),
            date: "October 2024".to_string(),
            featured: false,
        },
    ]
}
