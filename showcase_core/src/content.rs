//! Static portfolio content: navigation, hero, about, skills, projects,
//! contact channels and footer.

/// Page sections reachable from the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Sections listed in the header, in page order.
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub name: &'static str,
    pub blurb: &'static str,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct About {
    pub paragraphs: Vec<&'static str>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed level, 0 to 100
    pub proficiency: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    /// `None` when there is no public demo
    pub live_url: Option<&'static str>,
    pub code_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub owner: &'static str,
    pub socials: Vec<SocialLink>,
}

impl Footer {
    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.owner)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub brand: &'static str,
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub more_projects_url: &'static str,
    pub contact: Vec<ContactChannel>,
    pub footer: Footer,
    /// File name used when the resume is saved
    pub resume_file_name: &'static str,
}

const GITHUB: &str = "https://github.com/PragyeshChauhan";
const LINKEDIN: &str = "https://www.linkedin.com/in/pragyesh-chauhan01/";
const EMAIL: &str = "pragyeshchauhan26@gmail.com";

fn skill(name: &'static str, proficiency: u8, description: &'static str) -> Skill {
    Skill {
        name,
        proficiency,
        description,
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            brand: "DevShowcase",
            hero: Hero {
                name: "Pragyesh Chauhan",
                blurb: "I engineer accessible and high-performance digital solutions, combining \
                        scalable software architecture with intuitive user interfaces. My passion \
                        lies in building systems that are both technically robust and elegantly designed.",
                socials: vec![
                    SocialLink { label: "GitHub", url: GITHUB },
                    SocialLink { label: "LinkedIn", url: LINKEDIN },
                    SocialLink { label: "Facebook", url: "https://www.facebook.com/pragyesh.chauhan/" },
                ],
            },
            about: About {
                paragraphs: vec![
                    "Hi there! I'm Pragyesh. I'm a Software Engineer with 2+ years of experience, \
                     currently working at Bursys. I specialize in backend development, delivering \
                     robust and scalable applications.",
                    "Currently enhancing skills in JavaScript, React.js, Node.js, and other modern \
                     technologies to grow as a full-stack developer.",
                ],
                stats: vec![
                    Stat { value: "2.4+", label: "Years Experience" },
                    Stat { value: "8+", label: "Projects Completed" },
                ],
            },
            skills: vec![
                SkillCategory {
                    title: "Frontend Development",
                    skills: vec![
                        skill("React.js", 90, "Building dynamic UIs with React"),
                        skill("JavaScript", 85, "Core scripting for web apps"),
                        skill("TypeScript", 80, "Typed JavaScript for scalability"),
                        skill("HTML5", 95, "Semantic markup for web"),
                        skill("CSS3", 90, "Modern styling and animations"),
                        skill("Tailwind CSS", 85, "Utility-first CSS framework"),
                    ],
                },
                SkillCategory {
                    title: "Backend Development",
                    skills: vec![
                        skill("Java", 90, "Robust backend development"),
                        skill("Spring-Boot", 85, "Microservices with Spring"),
                        skill("RESTful APIs", 88, "API design and integration"),
                        skill("Microservices Architecture", 80, "Scalable system design"),
                        skill("Python", 75, "Versatile scripting and backend"),
                        skill("Django", 70, "Python web framework"),
                        skill("SQL", 85, "Database querying and design"),
                    ],
                },
                SkillCategory {
                    title: "Database",
                    skills: vec![
                        skill("MongoDB", 85, "NoSQL database management"),
                        skill("PostgreSQL", 80, "Relational database expertise"),
                        skill("MySQL", 82, "Widely-used SQL database"),
                    ],
                },
                SkillCategory {
                    title: "DevOps & Tools",
                    skills: vec![
                        skill("Git", 90, "Version control mastery"),
                        skill("GitHub", 88, "Collaboration and CI/CD"),
                        skill("Docker", 80, "Containerization for apps"),
                        skill("CI/CD Pipelines", 78, "Automated deployments"),
                        skill("AWS", 75, "Cloud infrastructure"),
                        skill("Netlify", 80, "Static site deployment"),
                    ],
                },
                SkillCategory {
                    title: "Other",
                    skills: vec![
                        skill("External API Integration", 85, "Seamless third-party APIs"),
                        skill("Agile Methodology", 90, "Iterative development"),
                        skill("API Testing & Documentation (Swagger)", 80, "API validation"),
                        skill("System Design", 78, "Scalable architectures"),
                        skill("Performance Optimization", 82, "App efficiency"),
                        skill("Code Review & Collaboration", 88, "Team workflows"),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "FieldEquip - Field Service",
                    description: "A full-featured field service management platform that streamlines \
                                  operations, connects field teams with the back office, and enables \
                                  real-time, data-driven service delivery.",
                    technologies: vec!["AWS Rekognition", "SpringBoot", "MongoDB", "Java"],
                    live_url: Some("https://www.fieldequip.com/field-service-management-software"),
                    code_url: GITHUB,
                },
                Project {
                    title: "FieldEquip - Field Ticketing",
                    description: "An oil and gas field service management platform that connects \
                                  operators, suppliers, assets, and field workers in real time.",
                    technologies: vec!["AWS S3", "SpringBoot", "MongoDB", "Java", "Rest APIs"],
                    live_url: Some("https://www.fieldequip.com/field-ticketing-management/"),
                    code_url: GITHUB,
                },
                Project {
                    title: "FieldEquip - Asset Management",
                    description: "A service management platform that connects assets and field \
                                  workers to the back office through automation, intelligent \
                                  scheduling, and integrations.",
                    technologies: vec!["SpringBoot", "MongoDB", "Java", "Spring security", "JWT"],
                    live_url: Some("https://www.fieldequip.com/asset-service-management/"),
                    code_url: GITHUB,
                },
                Project {
                    title: "FieldEquip - Time Management",
                    description: "Unified time entry across field, plant, and shop operations, \
                                  consolidating clock-ins, job activity tracking, and timesheet \
                                  approvals into one workflow.",
                    technologies: vec!["AWS Rekognition", "Java", "Spring-Boot", "MongoDB", "Rest API"],
                    live_url: Some("https://www.fieldequip.com/field-service-time-tracking-software/"),
                    code_url: GITHUB,
                },
                Project {
                    title: "FieldEquip - Integrations",
                    description: "An API layer that integrates FieldEquip with third-party applications.",
                    technologies: vec!["AWS S3", "SpringBoot", "MongoDB", "Java", "Rest APIs", "SQL", "MySQL"],
                    live_url: None,
                    code_url: GITHUB,
                },
                Project {
                    title: "CADMaster Website",
                    description: "A responsive showcase for CAD drafting, 3D modeling, and \
                                  architectural design services.",
                    technologies: vec!["React.js", "Tailwind CSS", "HTML", "JavaScript", "TypeScript"],
                    live_url: Some("https://cadmaster.netlify.app/"),
                    code_url: GITHUB,
                },
            ],
            more_projects_url: GITHUB,
            contact: vec![
                ContactChannel {
                    title: "Email",
                    value: EMAIL,
                    link: "mailto:pragyeshchauhan26@gmail.com",
                },
                ContactChannel {
                    title: "Phone",
                    value: "+919958500643",
                    link: "tel:+919958500643",
                },
                ContactChannel {
                    title: "Location",
                    value: "Panchkula, Haryana, India",
                    link: "https://www.google.com/maps/search/?api=1&query=Panchkula,Haryana,India",
                },
            ],
            footer: Footer {
                brand: "DevShowcase",
                tagline: "Crafting seamless digital experiences with robust backend systems and \
                          intuitive user interfaces.",
                owner: "Pragyesh Singh Chauhan",
                socials: vec![
                    SocialLink { label: "GitHub", url: GITHUB },
                    SocialLink { label: "LinkedIn", url: LINKEDIN },
                    SocialLink { label: "Email", url: "mailto:pragyeshchauhan26@gmail.com" },
                ],
            },
            resume_file_name: "PragyeshChauhan_Resume.pdf",
        }
    }
}

impl Portfolio {
    /// Skill categories whose skill names contain `query`, ignoring case.
    /// Categories left without skills are dropped; a blank query keeps all.
    pub fn filter_skills(&self, query: &str) -> Vec<SkillCategory> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.skills.clone();
        }
        self.skills
            .iter()
            .filter_map(|category| {
                let skills: Vec<Skill> = category
                    .skills
                    .iter()
                    .filter(|s| s.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                (!skills.is_empty()).then(|| SkillCategory {
                    title: category.title,
                    skills,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_keeps_every_category() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.filter_skills("   "), portfolio.skills);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_drops_empty_categories() {
        let portfolio = Portfolio::default();
        let result = portfolio.filter_skills("SQL");
        let titles: Vec<&str> = result.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Backend Development", "Database"]);

        let names: Vec<&str> = result.iter().flat_map(|c| c.skills.iter().map(|s| s.name)).collect();
        assert_eq!(names, vec!["SQL", "PostgreSQL", "MySQL"]);
    }

    #[test]
    fn test_no_match_yields_nothing() {
        assert!(Portfolio::default().filter_skills("cobol").is_empty());
    }

    #[test]
    fn test_proficiency_is_a_percentage() {
        let portfolio = Portfolio::default();
        assert!(portfolio
            .skills
            .iter()
            .flat_map(|c| &c.skills)
            .all(|s| s.proficiency <= 100));
    }

    #[test]
    fn test_footer_copyright_line() {
        let footer = Portfolio::default().footer;
        assert_eq!(
            footer.copyright(2026),
            "© 2026 Pragyesh Singh Chauhan. All rights reserved."
        );
    }

    #[test]
    fn test_nav_lists_sections_in_page_order() {
        let labels: Vec<&str> = Section::NAV.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["About", "Skills", "Projects", "Contact"]);
    }
}
