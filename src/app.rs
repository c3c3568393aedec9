use yew::prelude::*;

use folio_core::grid::GridDirection;
use folio_core::sections::SECTION_IDS;

use crate::language::{localized, use_language, LanguageCtx};
use crate::persisted::{load_settings, save_settings, SiteSettings};
use crate::scroll_pager::use_section_pager;
use crate::squares::SquaresBackground;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let language = use_state(|| load_settings().language);
    use_section_pager(&SECTION_IDS);
    let on_toggle = {
        let language = language.clone();
        Callback::from(move |_| {
            let next = language.toggle();
            save_settings(&SiteSettings::with_language(next));
            language.set(next);
        })
    };
    let ctx = LanguageCtx {
        current: *language,
        on_toggle,
    };
    html! {
        <ContextProvider<LanguageCtx> context={ctx}>
            <div class="site" lang={language.tag()}>
                <SquaresBackground direction={GridDirection::Diagonal} speed={0.5} />
                <Navbar />
                <main class="sections">
                    <HeroSection />
                    <SkillsSection />
                    <ExperienceSection />
                    <EducationSection />
                    <ProjectsSection />
                    <ContactSection />
                </main>
            </div>
        </ContextProvider<LanguageCtx>>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let language = use_language();
    let onclick = {
        let on_toggle = language.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    html! {
        <nav class="navbar">
            <span class="brand">{ "folio" }</span>
            <button class="language-toggle" {onclick}>
                { localized(language.current, "TR", "EN") }
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: AttrValue,
    title_en: &'static str,
    title_tr: &'static str,
    #[prop_or_default]
    children: Children,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    let language = use_language();
    html! {
        <section id={props.id.clone()} class="section">
            <h2>{ localized(language.current, props.title_en, props.title_tr) }</h2>
            { for props.children.iter() }
        </section>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let language = use_language();
    html! {
        <Section id="hero" title_en="Hi, I build for the web" title_tr="Merhaba, web için geliştiriyorum">
            <p>{ localized(
                language.current,
                "Full-stack developer with a soft spot for tidy interfaces.",
                "Derli toplu arayüzlere düşkün full-stack geliştirici.",
            ) }</p>
        </Section>
    }
}

#[function_component(SkillsSection)]
fn skills_section() -> Html {
    html! {
        <Section id="skills" title_en="Skills" title_tr="Yetenekler">
            <ul class="skills">
                <li>{ "Rust / WebAssembly" }</li>
                <li>{ "TypeScript" }</li>
                <li>{ "CSS" }</li>
                <li>{ "PostgreSQL" }</li>
            </ul>
        </Section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    let language = use_language();
    html! {
        <Section id="experience" title_en="Experience" title_tr="Deneyim">
            <p>{ localized(
                language.current,
                "Frontend engineer, 2021 to now. Product dashboards and design systems.",
                "Önyüz mühendisi, 2021'den bugüne. Ürün panelleri ve tasarım sistemleri.",
            ) }</p>
        </Section>
    }
}

#[function_component(EducationSection)]
fn education_section() -> Html {
    let language = use_language();
    html! {
        <Section id="education" title_en="Education" title_tr="Eğitim">
            <p>{ localized(
                language.current,
                "BSc Computer Engineering.",
                "Bilgisayar Mühendisliği lisansı.",
            ) }</p>
        </Section>
    }
}

struct Project {
    name: &'static str,
    summary_en: &'static str,
    summary_tr: &'static str,
    stack: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        name: "atlas",
        summary_en: "Interactive data atlas with offline-first tiles.",
        summary_tr: "Çevrimdışı öncelikli karolarla etkileşimli veri atlası.",
        stack: "Rust, WebAssembly, Canvas",
    },
    Project {
        name: "ledgerline",
        summary_en: "Small-business bookkeeping with live collaboration.",
        summary_tr: "Canlı iş birliğiyle küçük işletme muhasebesi.",
        stack: "TypeScript, PostgreSQL",
    },
    Project {
        name: "brew",
        summary_en: "Pour-over timer with shareable recipes.",
        summary_tr: "Paylaşılabilir tariflerle demleme zamanlayıcısı.",
        stack: "Rust, Yew",
    },
];

#[function_component(ProjectsSection)]
fn projects_section() -> Html {
    let language = use_language();
    let selected = use_state(|| None::<usize>);
    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    let modal = (*selected).map(|index| {
        let project = &PROJECTS[index];
        html! {
            <div class="modal-overlay" data-modal="true">
                <div class="modal">
                    <h3>{ project.name }</h3>
                    <p>{ localized(language.current, project.summary_en, project.summary_tr) }</p>
                    <p class="stack">{ project.stack }</p>
                    <button onclick={close.clone()}>
                        { localized(language.current, "Close", "Kapat") }
                    </button>
                </div>
            </div>
        }
    });
    html! {
        <Section id="projects" title_en="Projects" title_tr="Projeler">
            <ul class="projects">
                { for PROJECTS.iter().enumerate().map(|(index, project)| {
                    let selected = selected.clone();
                    let onclick = Callback::from(move |_: MouseEvent| selected.set(Some(index)));
                    html! {
                        <li key={project.name}>
                            <button {onclick}>{ project.name }</button>
                        </li>
                    }
                }) }
            </ul>
            { modal.unwrap_or_default() }
        </Section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let language = use_language();
    html! {
        <Section id="contact" title_en="Contact" title_tr="İletişim">
            <p>
                { localized(language.current, "Say hello: ", "Merhaba deyin: ") }
                <a href="mailto:hello@folio.dev">{ "hello@folio.dev" }</a>
            </p>
        </Section>
    }
}
