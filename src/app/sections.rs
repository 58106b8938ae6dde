use leptos::{ev::MouseEvent, html, prelude::*};

use super::{
    browser::{bounds_of, shared, with_shared, BrowserScheduler, Shared},
    contact_form::ContactForm,
    navbar::MagneticLink,
    reveal::Reveal,
    scroll::ScrollSignals,
};
use crate::{
    config::SiteConfig,
    motion::{
        counter::parse_target,
        pointer::{tilt_transform, TILT_RESET},
        scroll::parallax_transform,
        CounterGroup, ParallaxLayer, RevealKind, SkillBars,
    },
    page::{build_time, copyright_year, OWNER},
};

type Counters = Shared<CounterGroup<RwSignal<String>>>;
type Bars = Shared<SkillBars<RwSignal<String>>>;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Experience />
        <Projects />
        <Skills />
        <Contact />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let scroll = expect_context::<ScrollSignals>();
    let config = expect_context::<SiteConfig>().scroll;
    let shift = move |layer: ParallaxLayer| {
        let speed = config.speed(layer);
        move || parallax_transform(scroll.parallax.get(), speed)
    };

    view! {
        <section id="home" class="hero">
            <div class="hero-bg" style:transform=shift(ParallaxLayer::HeroBackground)></div>
            <div class="gradient-orb" style:transform=shift(ParallaxLayer::GradientOrb)></div>
            <div class="hero-content">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-title glitch" data-text=OWNER>
                    {OWNER}
                </h1>
                <p class="hero-subtitle">"Front-End Developer"</p>
                <p class="hero-description">
                    "I build fast, accessible interfaces with a taste for motion and neon."
                </p>
                <div class="hero-buttons">
                    <MagneticLink href="#projects" class="btn btn-primary">
                        "View My Work"
                    </MagneticLink>
                    <MagneticLink href="#contact" class="btn btn-secondary">
                        "Get In Touch"
                    </MagneticLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let counters: Counters = shared(CounterGroup::new(config.counter));
    provide_context(counters);

    let start = Callback::new(move |_| {
        with_shared(counters, |group| group.start(&BrowserScheduler));
    });

    view! {
        <section id="about" class="about">
            <Reveal class="fade-up">
                <h2 class="section-title">"About Me"</h2>
            </Reveal>
            <div class="about-content">
                <Reveal class="about-text fade-up">
                    <p>
                        "I'm a front-end developer who enjoys turning designs into interfaces "
                        "that feel quick and alive. Most of my work lives where layout, "
                        "animation and accessibility meet."
                    </p>
                    <p>
                        "Outside of client work I experiment with shaders, CSS tricks and "
                        "small tools that make the web a bit more fun."
                    </p>
                </Reveal>
                <Reveal class="about-stats" kind=RevealKind::Stats on_reveal=start>
                    <StatCounter target="50" label="Projects Completed" />
                    <StatCounter target="3" label="Years Experience" />
                    <StatCounter target="1000" label="Cups of Coffee" />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn StatCounter(target: &'static str, label: &'static str) -> impl IntoView {
    let text = RwSignal::new("0".to_string());
    let counters = expect_context::<Counters>();
    with_shared(counters, |group| group.register(parse_target(Some(target)), text));

    view! {
        <div class="stat-item">
            <span class="stat-number" data-target=target>
                {move || text.get()}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

const TIMELINE: [(&str, &str, &str, &str); 3] = [
    (
        "2023 - Present",
        "Front-End Developer",
        "Freelance",
        "Interactive marketing sites and dashboards for small product teams.",
    ),
    (
        "2022 - 2023",
        "UI Developer Intern",
        "Digital Agency",
        "Built component libraries and landing pages with a focus on performance.",
    ),
    (
        "2020 - 2022",
        "Self-taught Developer",
        "Open Source",
        "Learned HTML, CSS and JavaScript by shipping small projects every week.",
    ),
];

#[component]
fn Experience() -> impl IntoView {
    let items = TIMELINE
        .into_iter()
        .map(|(when, role, place, summary)| {
            view! {
                <Reveal class="timeline-item">
                    <div class="timeline-dot"></div>
                    <div class="timeline-content">
                        <span class="timeline-date">{when}</span>
                        <h3>{role}</h3>
                        <h4>{place}</h4>
                        <p>{summary}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="experience">
            <Reveal class="fade-up">
                <h2 class="section-title">"Experience"</h2>
            </Reveal>
            <div class="timeline">{items}</div>
        </section>
    }
}

const PROJECTS: [(&str, &str, &[&str]); 3] = [
    (
        "Neon Dashboard",
        "A realtime analytics dashboard with animated charts and a dark theme.",
        &["React", "D3", "CSS Grid"],
    ),
    (
        "Pixel Weather",
        "A weather app with retro visuals driven by the current forecast.",
        &["JavaScript", "Canvas", "REST"],
    ),
    (
        "Type Racer",
        "A typing game with live scoring and keyboard heatmaps.",
        &["TypeScript", "WebSockets"],
    ),
];

#[component]
fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .into_iter()
        .map(|(name, summary, tags)| view! { <ProjectCard name=name summary=summary tags=tags /> })
        .collect_view();

    view! {
        <section id="projects" class="projects">
            <Reveal class="fade-up">
                <h2 class="section-title">"Projects"</h2>
            </Reveal>
            <div class="projects-grid">{cards}</div>
        </section>
    }
}

#[component]
fn ProjectCard(
    name: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let transform = RwSignal::new(TILT_RESET.to_string());

    let on_move = move |ev: MouseEvent| {
        if let Some(el) = card.get_untracked() {
            transform.set(tilt_transform(
                bounds_of(&el),
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            ));
        }
    };

    view! {
        <Reveal class="project-card">
            <div
                node_ref=card
                class="project-inner"
                style:transform=move || transform.get()
                on:mousemove=on_move
                on:mouseleave=move |_| transform.set(TILT_RESET.to_string())
            >
                <h3 class="project-title">{name}</h3>
                <p class="project-description">{summary}</p>
                <ul class="project-tags">
                    {tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}

const SKILLS: [(&str, &str); 6] = [
    ("HTML & CSS", "95"),
    ("JavaScript", "90"),
    ("TypeScript", "80"),
    ("React", "85"),
    ("Animation", "75"),
    ("Accessibility", "70"),
];

#[component]
fn Skills() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let bars: Bars = shared(SkillBars::new(config.skill_bar_delay()));
    provide_context(bars);

    let animate = Callback::new(move |_| {
        with_shared(bars, |b| b.animate(&BrowserScheduler));
    });

    // the bars fill after load too, whether or not the section is in view
    let load_delay = config.skill_bar_load_delay();
    Effect::new(move |_| {
        set_timeout(move || animate.run(()), load_delay);
    });

    let cards = SKILLS
        .into_iter()
        .map(|(name, percent)| view! { <SkillBar name=name percent=percent /> })
        .collect_view();

    view! {
        <section id="skills" class="skills-section">
            <Reveal class="fade-up">
                <h2 class="section-title">"Skills"</h2>
            </Reveal>
            <Reveal class="skills" kind=RevealKind::Skills on_reveal=animate>
                <div class="skills-grid">{cards}</div>
            </Reveal>
        </section>
    }
}

#[component]
fn SkillBar(name: &'static str, percent: &'static str) -> impl IntoView {
    let width = RwSignal::new("0%".to_string());
    let bars = expect_context::<Bars>();
    with_shared(bars, |b| b.register(Some(percent), width));

    view! {
        <Reveal class="skill-card">
            <div class="skill-header">
                <span class="skill-name">{name}</span>
                <span class="skill-percent">{format!("{percent}%")}</span>
            </div>
            <div class="skill-bar">
                <div
                    class="skill-progress"
                    data-percent=percent
                    style:width=move || width.get()
                ></div>
            </div>
        </Reveal>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <Reveal class="fade-up">
                <h2 class="section-title">"Get In Touch"</h2>
                <p class="section-subtitle">
                    "Have a project in mind or just want to say hi? My inbox is open."
                </p>
            </Reveal>
            <div class="contact-content">
                <Reveal class="contact-info fade-up">
                    <div class="social-links">
                        <MagneticLink href="https://github.com/" class="social-link">
                            <i class="fab fa-github"></i>
                            <span class="sr-only">"GitHub"</span>
                        </MagneticLink>
                        <MagneticLink href="https://linkedin.com/" class="social-link">
                            <i class="fab fa-linkedin"></i>
                            <span class="sr-only">"LinkedIn"</span>
                        </MagneticLink>
                    </div>
                </Reveal>
                <Reveal class="fade-up">
                    <ContactForm />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>
                "© "<span id="currentYear">{copyright_year()}</span>" "{OWNER}
                ". All rights reserved."
            </p>
            <p class="build-info">"Built " {build_time()}</p>
        </footer>
    }
}
