//! Static testimonial records shown in the carousel and modal.

/// One quote plus author metadata. Identity is the record's list position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestimonialRecord {
    pub quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
    pub date: &'static str,
}

pub const TESTIMONIALS: &[TestimonialRecord] = &[
    TestimonialRecord {
        quote: "Working with Dawood has been an excellent experience. He has a real talent for simplifying complex DevSecOps processes into clear, actionable steps that everyone can follow. His expertise in cloud and DevOps has often been my go-to resource, and what sets him apart is his patience and willingness to share knowledge. Dawood not only solves problems but also helps elevate the entire team\u{2019}s skills.",
        author: "Umair Amjad",
        title: "Position: Software Engineer at TechCreator",
        date: "Date: November 26, 2024",
    },
    TestimonialRecord {
        quote: "Dawood's approach to building and maintaining reliable systems impressed us from the very beginning. He implemented a robust monitoring and alerting setup that gave us full visibility into our applications, resulting in improved performance and stability. Beyond his technical depth, he communicates clearly and works well with others, which makes collaboration easy. Dawood is a true professional we\u{2019}d be more than happy to work with again.",
        author: "Zaheer Abbas",
        title: "Position: Web Developer (Self-Employed)",
        date: "Date: February 02, 2025",
    },
    TestimonialRecord {
        quote: "Dawood consistently delivers beyond expectations and has been a key asset to our projects. He automated our deployment pipelines, reducing release times from hours to just minutes, which had a huge impact on productivity. What stands out is his calmness under pressure and ability to collaborate seamlessly across teams. Dawood combines technical excellence with professionalism, making him a truly reliable and standout DevOps engineer.",
        author: "Hamdan Ahmad",
        title: "Position: Project Manager at TechCreator",
        date: "Date: December 30, 2024",
    },
];
