//! Shared fixtures for pipeline tests.

pub(super) const ENGLISH_RESUME: &str = "\
John Doe
Software Engineer
john.doe@example.com
+1 234 567 8900
linkedin.com/in/johndoe

Summary
Seasoned software engineer focused on resilient backend systems.
I live in New York and enjoy hiking on weekends.

Experience
Senior Software Engineer - Tech Corp
January 2020 - Present
• Developed microservices using Java and Spring Boot
• Led a team of 5 developers

Software Engineer
Startup Inc
June 2018 - December 2019
Built REST APIs for the billing platform
Improved deployment times by 40%

Education
Bachelor of Computer Science
MIT University
Graduated: June 2015
Strong focus on distributed systems

Skills
Java, Python, Spring Boot, AWS, Docker
Agile, Scrum, Git
";

pub(super) const FRENCH_RESUME: &str = "\
Jean Dupont
Ingénieur logiciel confirmé
jean.dupont@example.fr

Expérience Professionnelle
Développeur Senior
Solutions SARL
janvier 2019 - décembre 2022
Conçu des microservices pour le secteur bancaire
Géré une équipe de trois développeurs

Formation
Master Informatique
Université de Lyon
Obtenu en 06/2018
Mention très bien

Compétences
Java, Python, Docker, Kubernetes
SQL, Git, Jenkins
";
