//! Localized strings shown by the contact form and the landing page.
//!
//! Every entry is a `LocalizedPair`; callers resolve it through the
//! `LanguageResolver` at render time. Strings are stored raw, escaping is
//! the job of whatever renders them.

use crate::i18n::LocalizedPair;

// ==================== Validation Messages ====================

pub const NAME_TOO_SHORT: LocalizedPair<'static> = LocalizedPair::new(
    "Nome deve ter pelo menos 2 caracteres",
    "Name must be at least 2 characters",
);

pub const NAME_TOO_LONG: LocalizedPair<'static> = LocalizedPair::new(
    "Nome deve ter no máximo 100 caracteres",
    "Name must be at most 100 characters",
);

pub const EMAIL_INVALID: LocalizedPair<'static> =
    LocalizedPair::new("Email inválido", "Invalid email");

pub const EMAIL_TOO_LONG: LocalizedPair<'static> = LocalizedPair::new(
    "Email deve ter no máximo 255 caracteres",
    "Email must be at most 255 characters",
);

pub const PHONE_INVALID: LocalizedPair<'static> =
    LocalizedPair::new("Telefone inválido", "Invalid phone number");

pub const PHONE_TOO_LONG: LocalizedPair<'static> = LocalizedPair::new(
    "Telefone deve ter no máximo 20 caracteres",
    "Phone must be at most 20 characters",
);

pub const MESSAGE_TOO_SHORT: LocalizedPair<'static> = LocalizedPair::new(
    "Mensagem deve ter pelo menos 10 caracteres",
    "Message must be at least 10 characters",
);

pub const MESSAGE_TOO_LONG: LocalizedPair<'static> = LocalizedPair::new(
    "Mensagem deve ter no máximo 1000 caracteres",
    "Message must be at most 1000 characters",
);

// ==================== Submission Notifications ====================

pub const SUCCESS_TITLE: LocalizedPair<'static> =
    LocalizedPair::new("Mensagem Enviada!", "Message Sent!");

pub const SUCCESS_DESCRIPTION: LocalizedPair<'static> = LocalizedPair::new(
    "Obrigado pelo contato. Retornaremos em breve!",
    "Thank you for reaching out. We'll get back to you soon!",
);

pub const FAILURE_TITLE: LocalizedPair<'static> =
    LocalizedPair::new("Falha no Envio", "Message Not Sent");

pub const FAILURE_DESCRIPTION: LocalizedPair<'static> = LocalizedPair::new(
    "Não foi possível enviar sua mensagem. Seus dados foram mantidos, tente novamente.",
    "We couldn't send your message. Your details were kept, please try again.",
);

// ==================== Contact Section ====================

pub const CONTACT_BADGE: LocalizedPair<'static> = LocalizedPair::new("Contato", "Contact");

pub const CONTACT_HEADING: LocalizedPair<'static> =
    LocalizedPair::new("Vamos Conversar?", "Let's Talk?");

pub const CONTACT_INTRO: LocalizedPair<'static> = LocalizedPair::new(
    "Pronto para transformar seu negócio com soluções de tecnologia? Entre em contato e vamos discutir seu projeto.",
    "Ready to transform your business with technology solutions? Get in touch and let's discuss your project.",
);

pub const FORM_TITLE: LocalizedPair<'static> =
    LocalizedPair::new("Solicitar Orçamento", "Request Quote");

pub const FORM_INTRO: LocalizedPair<'static> = LocalizedPair::new(
    "Preencha o formulário abaixo e retornaremos em até 24 horas.",
    "Fill out the form below and we'll get back to you within 24 hours.",
);

pub const PLACEHOLDER_NAME: LocalizedPair<'static> = LocalizedPair::new("Seu Nome", "Your Name");

pub const PLACEHOLDER_EMAIL: LocalizedPair<'static> =
    LocalizedPair::new("Seu Email", "Your Email");

pub const PLACEHOLDER_PHONE: LocalizedPair<'static> =
    LocalizedPair::new("Seu Telefone", "Your Phone");

pub const PLACEHOLDER_MESSAGE: LocalizedPair<'static> = LocalizedPair::new(
    "Conte sobre seu projeto...",
    "Tell us about your project...",
);

pub const SUBMIT_IDLE: LocalizedPair<'static> =
    LocalizedPair::new("Enviar Mensagem", "Send Message");

pub const SUBMIT_BUSY: LocalizedPair<'static> = LocalizedPair::new("Enviando...", "Sending...");

pub const LOCATION_LABEL: LocalizedPair<'static> = LocalizedPair::new("Localização", "Location");

pub const QUICK_RESPONSE_TITLE: LocalizedPair<'static> =
    LocalizedPair::new("Prefere uma resposta rápida?", "Prefer a quick response?");

pub const QUICK_RESPONSE_TEXT: LocalizedPair<'static> = LocalizedPair::new(
    "Clique no botão abaixo e fale diretamente comigo no WhatsApp!",
    "Click the button below and talk to me directly on WhatsApp!",
);

pub const WHATSAPP_CTA: LocalizedPair<'static> =
    LocalizedPair::new("Falar no WhatsApp", "Chat on WhatsApp");

pub const WHATSAPP_GREETING: LocalizedPair<'static> = LocalizedPair::new(
    "Olá! Gostaria de solicitar um orçamento.",
    "Hello! I would like to request a quote.",
);

// ==================== Page Shell ====================

/// Navigation entries as `(anchor, label)`.
pub const NAV_ITEMS: [(&str, LocalizedPair<'static>); 5] = [
    ("#home", LocalizedPair::new("Home", "Home")),
    ("#about", LocalizedPair::new("Sobre", "About")),
    ("#services", LocalizedPair::new("Serviços", "Services")),
    ("#portfolio", LocalizedPair::new("Portfólio", "Portfolio")),
    ("#contact", LocalizedPair::new("Contato", "Contact")),
];

pub const HERO_TITLE: LocalizedPair<'static> =
    LocalizedPair::new("Tecnologia da Informação", "Information Technology");

pub const HERO_EXPERIENCE: LocalizedPair<'static> =
    LocalizedPair::new("+ de 10 anos de experiência", "10+ years of experience");

/// Service highlights shown under the hero.
pub const HERO_SERVICES: [LocalizedPair<'static>; 3] = [
    LocalizedPair::new("Cibersegurança", "Cybersecurity"),
    LocalizedPair::new("Infraestrutura", "Infrastructure"),
    LocalizedPair::new("Desenvolvimento Web", "Web Development"),
];

// ==================== About ====================

pub const ABOUT_BADGE: LocalizedPair<'static> = LocalizedPair::new("Sobre Mim", "About Me");

pub const ABOUT_HEADING: LocalizedPair<'static> = LocalizedPair::new(
    "Profissional de TI com Visão Consultiva",
    "IT Professional with Consultative Vision",
);

pub const ABOUT_INTRO: LocalizedPair<'static> = LocalizedPair::new(
    "Com mais de uma década de experiência no setor de Tecnologia da Informação, atuo de forma proativa e consultiva para entregar soluções que realmente fazem a diferença. Minha expertise abrange desde suporte técnico e administração de servidores até cibersegurança avançada e desenvolvimento de aplicações web.",
    "With over a decade of experience in the Information Technology sector, I work proactively and consultatively to deliver solutions that truly make a difference. My expertise ranges from technical support and server administration to advanced cybersecurity and web application development.",
);

pub const ABOUT_HIGHLIGHTS: [LocalizedPair<'static>; 6] = [
    LocalizedPair::new("Mais de 10 anos de experiência em TI", "Over 10 years of IT experience"),
    LocalizedPair::new(
        "Especialista em ambientes Windows e Linux",
        "Expert in Windows and Linux environments",
    ),
    LocalizedPair::new(
        "Experiência com ITIL e metodologias ágeis (SCRUM)",
        "Experience with ITIL and agile methodologies (SCRUM)",
    ),
    LocalizedPair::new(
        "Analista SOC com foco em investigação de incidentes",
        "SOC Analyst focused on incident investigation",
    ),
    LocalizedPair::new("Threat Hunting e Cloud Security", "Threat Hunting and Cloud Security"),
    LocalizedPair::new(
        "Perfil proativo, consultivo e orientado a resultados",
        "Proactive, consultative and results-oriented profile",
    ),
];

pub const ABOUT_SKILLS: [LocalizedPair<'static>; 6] = [
    LocalizedPair::new("Cibersegurança", "Cybersecurity"),
    LocalizedPair::new("Administração de Servidores", "Server Administration"),
    LocalizedPair::new("Redes e Infraestrutura", "Networks & Infrastructure"),
    LocalizedPair::new("Virtualização e Backups", "Virtualization & Backups"),
    LocalizedPair::new("Desenvolvimento Web", "Web Development"),
    LocalizedPair::new("Consultoria em TI", "IT Consulting"),
];

/// Headline figures as `(value, label)`.
pub const ABOUT_STATS: [(&str, LocalizedPair<'static>); 3] = [
    ("10+", LocalizedPair::new("Anos de Experiência", "Years Experience")),
    ("500+", LocalizedPair::new("Projetos Realizados", "Projects Completed")),
    ("100%", LocalizedPair::new("Comprometimento", "Commitment")),
];

// ==================== Services ====================

pub const SERVICES_BADGE: LocalizedPair<'static> =
    LocalizedPair::new("Nossos Serviços", "Our Services");

pub const SERVICES_HEADING: LocalizedPair<'static> = LocalizedPair::new(
    "Soluções Completas em Tecnologia",
    "Complete Solutions in Technology",
);

pub const SERVICES_INTRO: LocalizedPair<'static> = LocalizedPair::new(
    "Oferecemos uma gama completa de serviços de TI para atender às necessidades do seu negócio com excelência e inovação.",
    "We offer a complete range of IT services to meet your business needs with excellence and innovation.",
);

/// Service cards as `(title, description)`.
pub const SERVICES: [(LocalizedPair<'static>, LocalizedPair<'static>); 7] = [
    (
        LocalizedPair::new("Suporte Técnico", "Technical Support"),
        LocalizedPair::new(
            "Assistência completa para resolver problemas de hardware e software, garantindo o funcionamento contínuo do seu ambiente de trabalho.",
            "Complete assistance to solve hardware and software problems, ensuring continuous operation of your work environment.",
        ),
    ),
    (
        LocalizedPair::new("Manutenção de Computadores", "Computer Maintenance"),
        LocalizedPair::new(
            "Serviços preventivos e corretivos para manter seus equipamentos funcionando com máximo desempenho e longevidade.",
            "Preventive and corrective services to keep your equipment running at maximum performance and longevity.",
        ),
    ),
    (
        LocalizedPair::new("Redes e Infraestrutura", "Networks & Infrastructure"),
        LocalizedPair::new(
            "Projeto, implementação e gerenciamento de redes corporativas seguras e de alta disponibilidade.",
            "Design, implementation and management of secure and high-availability corporate networks.",
        ),
    ),
    (
        LocalizedPair::new("Administração de Servidores", "Server Administration"),
        LocalizedPair::new(
            "Configuração e manutenção de servidores Windows e Linux, virtualização, backups e recuperação de desastres.",
            "Configuration and maintenance of Windows and Linux servers, virtualization, backups and disaster recovery.",
        ),
    ),
    (
        LocalizedPair::new("Cibersegurança e SOC", "Cybersecurity & SOC"),
        LocalizedPair::new(
            "Proteção avançada contra ameaças, análise de vulnerabilidades, threat hunting e monitoramento contínuo de segurança.",
            "Advanced threat protection, vulnerability analysis, threat hunting and continuous security monitoring.",
        ),
    ),
    (
        LocalizedPair::new("Consultoria em TI", "IT Consulting"),
        LocalizedPair::new(
            "Orientação estratégica para otimizar processos, reduzir custos e implementar as melhores práticas de tecnologia.",
            "Strategic guidance to optimize processes, reduce costs and implement technology best practices.",
        ),
    ),
    (
        LocalizedPair::new("Criação de Web Sites", "Website Development"),
        LocalizedPair::new(
            "Desenvolvimento de sites institucionais, landing pages e sistemas web modernos, responsivos e otimizados para SEO.",
            "Development of institutional websites, landing pages and modern, responsive and SEO-optimized web systems.",
        ),
    ),
];

// ==================== Portfolio ====================

pub const PORTFOLIO_BADGE: LocalizedPair<'static> = LocalizedPair::new("Portfólio", "Portfolio");

pub const PORTFOLIO_HEADING: LocalizedPair<'static> =
    LocalizedPair::new("Projetos em Destaque", "Featured Projects");

pub const PORTFOLIO_INTRO: LocalizedPair<'static> = LocalizedPair::new(
    "Conheça alguns dos projetos que realizei e os resultados que entreguei para meus clientes.",
    "Discover some of the projects I've completed and the results I've delivered to my clients.",
);

/// A portfolio entry and the technologies it used.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: LocalizedPair<'static>,
    pub description: LocalizedPair<'static>,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: LocalizedPair::new("Portal Corporativo", "Corporate Portal"),
        description: LocalizedPair::new(
            "Desenvolvimento de portal institucional com painel administrativo e integração com CRM.",
            "Development of institutional portal with admin panel and CRM integration.",
        ),
        technologies: &["React", "Node.js", "PostgreSQL"],
    },
    Project {
        title: LocalizedPair::new("Implementação SOC", "SOC Implementation"),
        description: LocalizedPair::new(
            "Estruturação completa de Security Operations Center com SIEM e automação de resposta.",
            "Complete Security Operations Center structuring with SIEM and response automation.",
        ),
        technologies: &["SIEM", "Splunk", "Python"],
    },
    Project {
        title: LocalizedPair::new("Migração para Nuvem", "Cloud Migration"),
        description: LocalizedPair::new(
            "Migração de infraestrutura on-premise para ambiente cloud com alta disponibilidade.",
            "Migration of on-premise infrastructure to cloud environment with high availability.",
        ),
        technologies: &["AWS", "Docker", "Kubernetes"],
    },
    Project {
        title: LocalizedPair::new("E-commerce B2B", "B2B E-commerce"),
        description: LocalizedPair::new(
            "Plataforma de vendas B2B com integração de pagamentos e gestão de pedidos.",
            "B2B sales platform with payment integration and order management.",
        ),
        technologies: &["Next.js", "Stripe", "MongoDB"],
    },
    Project {
        title: LocalizedPair::new("Auditoria de Segurança", "Security Audit"),
        description: LocalizedPair::new(
            "Análise completa de vulnerabilidades e implementação de correções de segurança.",
            "Complete vulnerability analysis and security fix implementation.",
        ),
        technologies: &["Pentest", "Nessus", "Burp Suite"],
    },
    Project {
        title: LocalizedPair::new("Reestruturação de Rede", "Network Restructuring"),
        description: LocalizedPair::new(
            "Redesenho completo de arquitetura de rede com segmentação e alta performance.",
            "Complete network architecture redesign with segmentation and high performance.",
        ),
        technologies: &["Cisco", "VLAN", "Firewall"],
    },
];

// ==================== Differentials ====================

pub const DIFFERENTIALS_BADGE: LocalizedPair<'static> =
    LocalizedPair::new("Diferenciais", "Differentials");

pub const DIFFERENTIALS_HEADING: LocalizedPair<'static> =
    LocalizedPair::new("Por que Me Escolher?", "Why Choose Me?");

pub const DIFFERENTIALS_INTRO: LocalizedPair<'static> = LocalizedPair::new(
    "Entenda o que faz a diferença quando você trabalha com um profissional dedicado e experiente.",
    "Understand what makes the difference when you work with a dedicated and experienced professional.",
);

/// Differential cards as `(title, description)`.
pub const DIFFERENTIALS: [(LocalizedPair<'static>, LocalizedPair<'static>); 4] = [
    (
        LocalizedPair::new("10+ Anos de Experiência", "10+ Years of Experience"),
        LocalizedPair::new(
            "Mais de uma década entregando soluções de tecnologia com excelência e compromisso.",
            "Over a decade delivering technology solutions with excellence and commitment.",
        ),
    ),
    (
        LocalizedPair::new("Ambientes Críticos", "Critical Environments"),
        LocalizedPair::new(
            "Experiência comprovada em ambientes de alta disponibilidade e missão crítica.",
            "Proven experience in high availability and mission-critical environments.",
        ),
    ),
    (
        LocalizedPair::new("Visão Consultiva", "Consultative Vision"),
        LocalizedPair::new(
            "Abordagem estratégica focada em entender e resolver os desafios reais do seu negócio.",
            "Strategic approach focused on understanding and solving your business real challenges.",
        ),
    ),
    (
        LocalizedPair::new("Foco em Segurança", "Security Focus"),
        LocalizedPair::new(
            "Implementação de boas práticas de segurança em todos os projetos e soluções.",
            "Implementation of security best practices in all projects and solutions.",
        ),
    ),
];

/// Generic failure shown when the server reply cannot be read.
pub const NETWORK_FAILURE: LocalizedPair<'static> = LocalizedPair::new(
    "Não foi possível enviar agora. Tente novamente.",
    "Could not send right now. Please try again.",
);

/// Tooltip on the language button, naming the language it switches to.
pub const SWITCH_LANGUAGE: LocalizedPair<'static> =
    LocalizedPair::new("Switch to English", "Mudar para Português");

pub const FOOTER_RIGHTS: LocalizedPair<'static> =
    LocalizedPair::new("Todos os direitos reservados.", "All rights reserved.");
