//! Fixed data pools the generator and skill extractor draw from.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa", "Matthew", "Sophia", "Anthony",
    "Emma", "Mark", "Olivia", "Amir", "Fatima", "Wei", "Mei", "Carlos", "Elena", "Jamal", "Aisha",
    "Raj", "Priya",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson", "Moore",
    "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Garcia",
    "Martinez", "Robinson", "Clark", "Rodriguez", "Lewis", "Lee", "Walker", "Hall", "Allen",
    "Young", "Hernandez", "King", "Patel", "Kim", "Chen", "Singh", "Lopez", "Gonzalez", "Nguyen",
    "Khan", "Shah", "Ali",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "company.com",
];

/// Skills a generated candidate can list.
pub const SKILLS: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Vue", "Angular", "Node.js", "Express", "Python",
    "Django", "Flask", "Java", "Spring", "C#", ".NET", "PHP", "Laravel", "Ruby", "Rails", "Go",
    "Rust", "AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD", "Git", "MongoDB",
    "PostgreSQL", "MySQL", "Redis", "GraphQL", "REST API", "Microservices", "TDD", "Agile",
    "Scrum", "DevOps", "Data Science", "Machine Learning",
];

pub const EDUCATION: &[&str] = &[
    "B.S. Computer Science, Stanford University",
    "M.S. Computer Engineering, MIT",
    "B.A. Information Systems, UC Berkeley",
    "Ph.D. Computer Science, Carnegie Mellon University",
    "B.S. Software Engineering, Georgia Tech",
    "M.S. Data Science, Harvard University",
    "B.S. Mathematics, Princeton University",
    "B.S. Electrical Engineering, Caltech",
    "M.S. Artificial Intelligence, University of Washington",
    "B.S. Information Technology, NYU",
];

/// Skills the resume skill extractor "finds". Deliberately a different list
/// from [`SKILLS`].
pub const EXTRACTION_SKILLS: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Next.js", "Node.js", "Express", "MongoDB", "SQL",
    "PostgreSQL", "AWS", "Docker", "Kubernetes", "Python", "Java", "C#", "Ruby", "Go", "PHP",
    "HTML", "CSS", "TailwindCSS", "Redux", "GraphQL", "RESTful API", "Git", "CI/CD", "Agile",
    "Scrum", "Test Driven Development", "Machine Learning", "Data Analysis", "Cybersecurity",
    "Cloud Computing", "DevOps",
];
