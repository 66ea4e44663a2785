//! DevShowcase Desktop - Entry point for the Iced portfolio.

use showcase_core::contact::{ContactController, Field, SubmissionStatus};
use showcase_core::content::{Portfolio, Project, Section, SkillCategory};
use showcase_core::utils::config::Config;
use showcase_core::utils::error::ResultExt;
use showcase_core::utils::{logger, time as showcase_time};
use showcase_core::{debug_module, dispatch, resume, DispatchReport, EmailJsRelay, Effect, Typewriter};
use showcase_desktop::canvas::{LoadingSpinner, ParticleBackground, SpinnerState, TiltCardCanvas};
use showcase_desktop::styles::{
    card_style, editor_style, header_style, icon_button_style, input_style, nav_button_style, notice_style,
    primary_button_style, progress_bar_style, secondary_button_style, tag_style, transparent_style,
};
use showcase_desktop::{
    app_theme, palette, PaletteColors, ParticleBackgroundState, ScrollState, SplashState,
    TiltCardState, CONTENT_MAX_WIDTH, HEADER_HEIGHT, HERO_HEIGHT, MAX_FRAME_MS,
    PROGRESS_BAR_HEIGHT, PROJECT_CARD_HEIGHT, PROJECT_CARD_WIDTH, SPINNER_TICK_INCREMENT,
    SPLASH_SPINNER_SIZE, TICK_INTERVAL_MS, TOAST_DURATION_MS, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use iced_fonts::bootstrap;

use iced::alignment::Horizontal;
use iced::time::{self, Duration, Instant};
use iced::widget::canvas::Canvas;
use iced::widget::{
    button, column, container, mouse_area, row, scrollable, stack, text, text_editor, text_input,
    Column, Row, Space, Text,
};
use iced::{window, Alignment, Color, Element, Font, Length, Point, Size, Subscription, Task};
use std::sync::Arc;

/// Application state.
struct App {
    config: Config,
    portfolio: Portfolio,
    splash: SplashState,
    background: ParticleBackgroundState,
    typewriter: Effect<Typewriter>,
    scroll: ScrollState,
    /// Tilt card states, one per project
    tilt_cards: Vec<TiltCardState>,
    contact: ContactController,
    message_editor: text_editor::Content,
    skill_query: String,
    spinner_tick: f32,
    window_size: Size,
    last_tick: Option<Instant>,
    /// Short-lived status line (resume saved, link failed to open)
    toast: Option<String>,
    toast_elapsed: Duration,
    /// Error message if initialization failed
    init_error: Option<String>,
    /// False when the config file on disk failed to load; it is left alone
    save_config: bool,
}

#[derive(Debug, Clone)]
enum Message {
    Tick(Instant),
    WindowResized(Size),
    Scrolled(scrollable::Viewport),
    NavigateTo(Section),
    FieldChanged(Field, String),
    MessageEdited(text_editor::Action),
    Submit,
    Submitted(Arc<DispatchReport>),
    DismissNotice,
    SkillQueryChanged(String),
    CardHovered(usize, bool),
    CardMouseMoved(usize, Point),
    OpenLink(String),
    DownloadResume,
    ToggleBackground,
    DismissInitError,
}

fn page_id() -> iced::widget::Id {
    iced::widget::Id::new("page")
}

/// Approximate scroll fraction at which each section starts.
fn section_anchor(section: Section) -> f32 {
    match section {
        Section::Hero => 0.0,
        Section::About => 0.17,
        Section::Skills => 0.33,
        Section::Projects => 0.62,
        Section::Contact => 0.86,
    }
}

fn label<'a>(content: impl text::IntoFragment<'a>, size: u16, color: Color) -> Text<'a> {
    text(content)
        .size(u32::from(size))
        .style(move |_| text::Style { color: Some(color) })
}

fn social_icon<'a>(name: &str) -> Text<'a> {
    match name {
        "GitHub" => bootstrap::github(),
        "LinkedIn" => bootstrap::linkedin(),
        "Facebook" => bootstrap::facebook(),
        "Email" => bootstrap::envelope(),
        "Phone" => bootstrap::telephone(),
        "Location" => bootstrap::geo_alt(),
        _ => bootstrap::globe(),
    }
}

impl App {
    /// Initializes the application. Shows error dialog if initialization fails.
    fn init() -> (Self, Task<Message>) {
        match Self::try_init() {
            Ok(app) => (app, Task::none()),
            Err(err) => {
                eprintln!("Initialization error: {err}");
                logger::error(&format!("Initialization error: {err}"));
                let mut app = Self::from_config(Config::load_or_default_from(Config::get_config_path()));
                app.init_error = Some(format!("{err:#}"));
                app.save_config = false;
                (app, Task::none())
            }
        }
    }

    /// Attempts to initialize the application, returning errors properly.
    fn try_init() -> anyhow::Result<Self> {
        let _ = logger::init_global_logger();

        let config = Config::load_or_default()?;
        if let Some(field) = config.relay.missing_field() {
            logger::warn(&format!("Contact relay not configured: missing {field}"));
        }
        Ok(Self::from_config(config))
    }

    fn from_config(config: Config) -> Self {
        let portfolio = Portfolio::default();

        let typewriter = Typewriter::from_config(&config.typewriter).unwrap_or_else(|err| {
            logger::warn(&format!("Using stock headline phrases: {err}"));
            Typewriter::default()
        });

        let tilt_cards = (0..portfolio.projects.len())
            .map(|_| TiltCardState::default())
            .collect();

        Self {
            background: ParticleBackgroundState::new(&config.background, WINDOW_WIDTH, WINDOW_HEIGHT),
            contact: ContactController::from_config(&config.relay),
            typewriter: Effect::new(typewriter),
            splash: SplashState::default(),
            scroll: ScrollState::default(),
            tilt_cards,
            message_editor: text_editor::Content::new(),
            skill_query: String::new(),
            spinner_tick: 0.0,
            window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            last_tick: None,
            toast: None,
            toast_elapsed: Duration::ZERO,
            init_error: None,
            save_config: true,
            portfolio,
            config,
        }
    }

    /// The headline only types while it can be seen.
    fn sync_typewriter(&mut self) {
        let visible = !self.splash.is_visible() && self.scroll.hero_visible();
        if visible != self.typewriter.is_running() {
            debug_module!("DESKTOP", "Typewriter running: {}", visible);
        }
        self.typewriter.set_running(visible);
    }

    fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(message.into());
        self.toast_elapsed = Duration::ZERO;
    }

    /// True while anything on screen is animating.
    fn needs_frames(&self) -> bool {
        self.splash.is_visible()
            || self.typewriter.is_running()
            || self.background.is_running()
            || self.scroll.progress.is_animating()
            || self.contact.status() == SubmissionStatus::Submitting
            || self.contact.needs_ticks()
            || self.toast.is_some()
            || self.tilt_cards.iter().any(|card| card.is_hovered)
    }

    /// Section whose anchor the viewport has most recently passed.
    fn current_section(&self) -> Section {
        let progress = self.scroll.progress.target;
        Section::NAV
            .iter()
            .rev()
            .copied()
            .find(|section| progress + 0.02 >= section_anchor(*section))
            .unwrap_or(Section::Hero)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map(|previous| now.saturating_duration_since(previous))
                    .unwrap_or_default()
                    .min(Duration::from_millis(MAX_FRAME_MS));
                self.last_tick = Some(now);

                if self.splash.update(elapsed) {
                    logger::debug("Splash finished");
                    self.sync_typewriter();
                }
                self.typewriter.tick(elapsed);
                self.background.update(elapsed);
                self.scroll.update();
                self.contact.tick(elapsed);
                for card in &mut self.tilt_cards {
                    card.update();
                }
                self.spinner_tick += SPINNER_TICK_INCREMENT;

                if self.toast.is_some() {
                    self.toast_elapsed += elapsed;
                    if self.toast_elapsed >= Duration::from_millis(TOAST_DURATION_MS) {
                        self.toast = None;
                    }
                }
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.background.resize(size.width, size.height);
            }
            Message::Scrolled(viewport) => {
                let offset = viewport.absolute_offset();
                let relative = viewport.relative_offset();
                self.scroll.scrolled(offset.y, relative.y);
                self.sync_typewriter();
            }
            Message::NavigateTo(section) => {
                debug_module!("DESKTOP", "Navigating to {}", section.label());
                return iced::widget::operation::snap_to(
                    page_id(),
                    scrollable::RelativeOffset {
                        x: 0.0,
                        y: section_anchor(section),
                    },
                );
            }
            Message::FieldChanged(field, value) => {
                self.contact.set_field(field, value);
            }
            Message::MessageEdited(action) => {
                self.message_editor.perform(action);
                self.contact.set_field(Field::Message, self.message_editor.text());
            }
            Message::Submit => {
                let timestamp = showcase_time::relay_timestamp_now();
                let Some(prepared) = self.contact.begin_submit(timestamp) else {
                    return Task::none();
                };
                logger::info(&format!("Submitting contact message from {}", prepared.params.email));

                match EmailJsRelay::new(&self.config.relay) {
                    Ok(relay) => {
                        return Task::perform(
                            async move { dispatch(&relay, &prepared).await },
                            |report| Message::Submitted(Arc::new(report)),
                        );
                    }
                    Err(err) => {
                        logger::error(&format!("Contact relay unavailable: {err}"));
                        self.contact.finish_submit(&DispatchReport::not_configured(err));
                    }
                }
            }
            Message::Submitted(report) => {
                self.contact.finish_submit(&report);
                if self.contact.form().message.is_empty() {
                    self.message_editor = text_editor::Content::new();
                }
            }
            Message::DismissNotice => {
                self.contact.dismiss_notice();
            }
            Message::SkillQueryChanged(query) => {
                self.skill_query = query;
            }
            // Single match arm handles all tilt cards via index
            Message::CardHovered(idx, hovered) => {
                if let Some(card) = self.tilt_cards.get_mut(idx) {
                    card.set_hovered(hovered);
                }
            }
            Message::CardMouseMoved(idx, point) => {
                if let Some(card) = self.tilt_cards.get_mut(idx) {
                    card.set_mouse_position(point);
                }
            }
            Message::OpenLink(url) => {
                if let Err(err) = open::that(&url) {
                    logger::warn(&format!("Failed to open {url}: {err}"));
                    self.show_toast(format!("Could not open {url}"));
                }
            }
            Message::DownloadResume => {
                let saved = resume::download_dir().and_then(|dir| {
                    resume::export_resume(
                        &self.config.resume_path,
                        &dir,
                        self.portfolio.resume_file_name,
                    )
                })
                .with_file_context(&self.config.resume_path.display().to_string());
                match saved {
                    Ok(path) => {
                        self.show_toast(format!("Resume saved to {}", path.display()));
                        if let Err(err) = open::that(&path) {
                            logger::warn(&format!("Failed to open resume: {err}"));
                        }
                    }
                    Err(err) => {
                        logger::error(&format!("Resume download failed: {err:#}"));
                        self.show_toast(format!("Could not save resume: {}", err.root_cause()));
                    }
                }
            }
            Message::ToggleBackground => {
                let enabled = !self.config.background.enabled;
                self.config.background.enabled = enabled;
                self.background.set_enabled(enabled);
                if self.save_config {
                    if let Err(err) = self.config.save() {
                        logger::warn(&format!("Failed to save settings: {err}"));
                    }
                }
            }
            Message::DismissInitError => {
                self.init_error = None;
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_, size)| Message::WindowResized(size));
        if !self.needs_frames() {
            return resize;
        }
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick);
        Subscription::batch(vec![resize, ticks])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette();

        let background = Canvas::new(ParticleBackground::<Message>::new(&self.background, pal))
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(ref error) = self.init_error {
            return stack![background, self.error_view(error, pal)].into();
        }

        if self.splash.is_visible() {
            return stack![background, self.splash_view(pal)].into();
        }

        let page = Column::new()
            .push(self.hero(pal))
            .push(self.about(pal))
            .push(self.skills(pal))
            .push(self.projects(pal))
            .push(self.contact_section(pal))
            .push(self.footer(pal))
            .spacing(72)
            .padding([0, 32]);

        let page = scrollable(
            container(page)
                .max_width(CONTENT_MAX_WIDTH)
                .width(Length::Fill),
        )
        .id(page_id())
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

        let page = container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center);

        let main_layer = column![self.progress_bar(pal), self.header(pal), page]
            .width(Length::Fill)
            .height(Length::Fill);

        let toast: Element<'_, Message> = match &self.toast {
            Some(message) => container(
                container(label(message.as_str(), 13, pal.text))
                    .padding([10, 16])
                    .style(card_style(pal)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .align_x(Horizontal::Right)
            .align_y(iced::alignment::Vertical::Bottom)
            .into(),
            None => Space::new().into(),
        };

        stack![background, main_layer, toast].into()
    }

    fn spinner(&self, size: f32, pal: PaletteColors) -> Element<'_, Message> {
        Canvas::new(LoadingSpinner::new(SpinnerState {
            tick: self.splash.spinner_tick.max(self.spinner_tick),
            size,
            color: pal.accent,
        }))
        .width(Length::Fixed(size * 2.5))
        .height(Length::Fixed(size * 2.5))
        .into()
    }

    fn splash_view(&self, pal: PaletteColors) -> Element<'_, Message> {
        container(
            column![
                self.spinner(SPLASH_SPINNER_SIZE, pal),
                label(self.portfolio.brand, 20, pal.text),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn error_view<'a>(&'a self, error: &'a str, pal: PaletteColors) -> Element<'a, Message> {
        let card = container(
            column![
                label("DevShowcase could not start cleanly", 20, pal.danger),
                label(error, 13, pal.text).font(Font::MONOSPACE),
                button(label("Continue with defaults", 14, pal.background))
                    .on_press(Message::DismissInitError)
                    .padding([8, 16])
                    .style(primary_button_style(pal)),
            ]
            .spacing(16),
        )
        .padding(24)
        .max_width(560)
        .style(card_style(pal));

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn progress_bar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let width = self.window_size.width * self.scroll.progress.position;
        container(Space::new())
            .width(Length::Fixed(width.max(0.0)))
            .height(Length::Fixed(PROGRESS_BAR_HEIGHT))
            .style(progress_bar_style(pal))
            .into()
    }

    fn header(&self, pal: PaletteColors) -> Element<'_, Message> {
        let active = self.current_section();

        let brand = button(label(self.portfolio.brand, 22, pal.accent).font(Font::MONOSPACE))
            .on_press(Message::NavigateTo(Section::Hero))
            .style(nav_button_style(pal, false));

        let nav = Section::NAV.iter().fold(Row::new().spacing(4), |nav, section| {
            nav.push(
                button(text(section.label()).size(15))
                    .on_press(Message::NavigateTo(*section))
                    .padding([6, 12])
                    .style(nav_button_style(pal, *section == active)),
            )
        });

        let background_toggle = button(
            if self.config.background.enabled {
                bootstrap::stars()
            } else {
                bootstrap::moon()
            }
            .size(16),
        )
        .on_press(Message::ToggleBackground)
        .padding(8)
        .style(icon_button_style(pal));

        let resume = button(
            row![bootstrap::download().size(14), text("Resume").size(14)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .on_press(Message::DownloadResume)
        .padding([8, 16])
        .style(primary_button_style(pal));

        container(
            row![brand, Space::new().width(Length::Fill), nav, background_toggle, resume]
                .spacing(12)
                .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0, 32])
        .center_y(Length::Fixed(HEADER_HEIGHT))
        .style(header_style(pal, self.scroll.header_solid()))
        .into()
    }

    fn section_title<'a>(&self, title: &'a str, subtitle: &'a str, pal: PaletteColors) -> Element<'a, Message> {
        column![label(title, 34, pal.text), label(subtitle, 15, pal.muted)]
            .spacing(6)
            .into()
    }

    fn hero(&self, pal: PaletteColors) -> Element<'_, Message> {
        let hero = &self.portfolio.hero;

        let headline = row![
            label(self.typewriter.state().display(), 28, pal.accent).font(Font::MONOSPACE),
            label("|", 28, pal.accent_alt).font(Font::MONOSPACE),
        ];

        let socials = hero.socials.iter().fold(Row::new().spacing(10), |row, social| {
            row.push(
                button(social_icon(social.label).size(18))
                    .on_press(Message::OpenLink(social.url.to_string()))
                    .padding(10)
                    .style(icon_button_style(pal)),
            )
        });

        let actions = row![
            button(text("Contact Me").size(15))
                .on_press(Message::NavigateTo(Section::Contact))
                .padding([10, 20])
                .style(primary_button_style(pal)),
            button(
                row![bootstrap::download().size(14), text("Download Resume").size(15)]
                    .spacing(8)
                    .align_y(Alignment::Center),
            )
            .on_press(Message::DownloadResume)
            .padding([10, 20])
            .style(secondary_button_style(pal)),
        ]
        .spacing(12);

        container(
            column![
                label("Hi, I'm", 18, pal.muted),
                label(hero.name, 56, pal.text),
                headline,
                container(label(hero.blurb, 16, pal.muted)).max_width(640),
                actions,
                socials,
            ]
            .spacing(20),
        )
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .center_y(Length::Fixed(HERO_HEIGHT))
        .into()
    }

    fn about(&self, pal: PaletteColors) -> Element<'_, Message> {
        let about = &self.portfolio.about;

        let paragraphs = about
            .paragraphs
            .iter()
            .fold(Column::new().spacing(14), |col, paragraph| {
                col.push(label(*paragraph, 16, pal.text))
            });

        let stats = about.stats.iter().fold(Row::new().spacing(16), |row, stat| {
            row.push(
                container(
                    column![label(stat.value, 32, pal.accent), label(stat.label, 14, pal.muted)]
                        .spacing(4)
                        .align_x(Alignment::Center),
                )
                .padding(20)
                .width(Length::Fixed(180.0))
                .style(card_style(pal)),
            )
        });

        column![
            self.section_title("About Me", "Who I am and what I do", pal),
            paragraphs,
            stats,
        ]
        .spacing(24)
        .into()
    }

    fn skill_category(&self, category: SkillCategory, pal: PaletteColors) -> Element<'_, Message> {
        let skills = category.skills.into_iter().fold(Column::new().spacing(12), |col, skill| {
            let filled = u16::from(skill.proficiency.min(100)).max(1);
            let mut bar = Row::new().push(
                container(Space::new())
                    .width(Length::FillPortion(filled))
                    .height(Length::Fixed(6.0))
                    .style(progress_bar_style(pal)),
            );
            if filled < 100 {
                bar = bar.push(Space::new().width(Length::FillPortion(100 - filled)));
            }

            col.push(
                column![
                    row![
                        label(skill.name, 14, pal.text),
                        Space::new().width(Length::Fill),
                        label(format!("{}%", skill.proficiency), 12, pal.muted),
                    ],
                    bar,
                    label(skill.description, 12, pal.muted),
                ]
                .spacing(4),
            )
        });

        container(column![label(category.title, 18, pal.accent), skills].spacing(14))
            .padding(20)
            .width(Length::Fixed(340.0))
            .style(card_style(pal))
            .into()
    }

    fn skills(&self, pal: PaletteColors) -> Element<'_, Message> {
        let search = row![
            bootstrap::search().size(14),
            text_input("Search skills...", &self.skill_query)
                .on_input(Message::SkillQueryChanged)
                .padding(10)
                .style(input_style(pal, false)),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let categories = self.portfolio.filter_skills(&self.skill_query);
        let body: Element<'_, Message> = if categories.is_empty() {
            label(format!("No skills match \"{}\"", self.skill_query.trim()), 15, pal.muted).into()
        } else {
            categories
                .into_iter()
                .fold(Row::new().spacing(16), |row, category| {
                    row.push(self.skill_category(category, pal))
                })
                .wrap()
                .vertical_spacing(16)
                .into()
        };

        column![
            self.section_title("My Skills", "Technologies I work with", pal),
            container(search).max_width(420),
            body,
        ]
        .spacing(24)
        .into()
    }

    fn project_card<'a>(&'a self, idx: usize, project: &'a Project, pal: PaletteColors) -> Element<'a, Message> {
        let tags = project
            .technologies
            .iter()
            .fold(Row::new().spacing(6), |row, tech| {
                row.push(
                    container(label(*tech, 11, pal.text))
                        .padding([3, 8])
                        .style(tag_style(pal)),
                )
            })
            .wrap()
            .vertical_spacing(6);

        let mut links = Row::new().spacing(10);
        if let Some(url) = project.live_url {
            links = links.push(
                button(
                    row![bootstrap::box_arrow_up_right().size(12), text("Live Demo").size(13)]
                        .spacing(6)
                        .align_y(Alignment::Center),
                )
                .on_press(Message::OpenLink(url.to_string()))
                .padding([6, 12])
                .style(primary_button_style(pal)),
            );
        }
        links = links.push(
            button(
                row![bootstrap::github().size(12), text("Code").size(13)]
                    .spacing(6)
                    .align_y(Alignment::Center),
            )
            .on_press(Message::OpenLink(project.code_url.to_string()))
            .padding([6, 12])
            .style(secondary_button_style(pal)),
        );

        let body = container(
            column![
                label(project.title, 18, pal.text),
                label(project.description, 13, pal.muted),
                Space::new().height(Length::Fill),
                tags,
                links,
            ]
            .spacing(12),
        )
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(transparent_style());

        let state = &self.tilt_cards[idx];
        let card_bg = Canvas::new(TiltCardCanvas::<Message>::new(
            state,
            Color { a: 0.85, ..pal.surface_raised },
            pal,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        mouse_area(
            container(stack![card_bg, body])
                .width(Length::Fixed(PROJECT_CARD_WIDTH))
                .height(Length::Fixed(PROJECT_CARD_HEIGHT)),
        )
        .on_enter(Message::CardHovered(idx, true))
        .on_exit(Message::CardHovered(idx, false))
        .on_move(move |point| Message::CardMouseMoved(idx, point))
        .into()
    }

    fn projects(&self, pal: PaletteColors) -> Element<'_, Message> {
        let cards = self
            .portfolio
            .projects
            .iter()
            .enumerate()
            .fold(Row::new().spacing(20), |row, (idx, project)| {
                row.push(self.project_card(idx, project, pal))
            })
            .wrap()
            .vertical_spacing(20);

        let more = button(
            row![bootstrap::github().size(14), text("View more on GitHub").size(14)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .on_press(Message::OpenLink(self.portfolio.more_projects_url.to_string()))
        .padding([8, 16])
        .style(secondary_button_style(pal));

        column![
            self.section_title("Featured Projects", "Some things I've built", pal),
            cards,
            more,
        ]
        .spacing(24)
        .into()
    }

    fn field_input(&self, field: Field, pal: PaletteColors) -> Element<'_, Message> {
        let error = self.contact.error_for(field);

        let input: Element<'_, Message> = if field == Field::Message {
            text_editor(&self.message_editor)
                .placeholder(field.placeholder())
                .on_action(Message::MessageEdited)
                .padding(12)
                .height(Length::Fixed(140.0))
                .style(editor_style(pal, error.is_some()))
                .into()
        } else {
            text_input(field.placeholder(), self.contact.form().field(field))
                .on_input(move |value| Message::FieldChanged(field, value))
                .on_submit(Message::Submit)
                .padding(12)
                .style(input_style(pal, error.is_some()))
                .into()
        };

        let mut col = column![label(field.label(), 13, pal.muted), input].spacing(6);
        if let Some(error) = error {
            col = col.push(label(error, 12, pal.danger));
        }
        col.into()
    }

    fn contact_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let channels = self
            .portfolio
            .contact
            .iter()
            .fold(Column::new().spacing(14), |col, channel| {
                col.push(
                    button(
                        row![
                            social_icon(channel.title).size(20),
                            column![label(channel.title, 13, pal.muted), label(channel.value, 15, pal.text)]
                                .spacing(2),
                        ]
                        .spacing(14)
                        .align_y(Alignment::Center),
                    )
                    .on_press(Message::OpenLink(channel.link.to_string()))
                    .padding(14)
                    .width(Length::Fill)
                    .style(secondary_button_style(pal)),
                )
            });

        let submitting = self.contact.status() == SubmissionStatus::Submitting;
        let submit_label: Element<'_, Message> = if submitting {
            row![self.spinner(6.0, pal), text("Sending...").size(15)]
                .spacing(8)
                .align_y(Alignment::Center)
                .into()
        } else {
            text("Send Message").size(15).into()
        };
        let submit = button(submit_label)
            .on_press_maybe(self.contact.can_submit().then_some(Message::Submit))
            .padding([10, 24])
            .style(primary_button_style(pal));

        let mut form = column![
            row![self.field_input(Field::Name, pal), self.field_input(Field::Email, pal)].spacing(16),
            self.field_input(Field::Subject, pal),
            self.field_input(Field::Message, pal),
            submit,
        ]
        .spacing(16);

        if let Some(notice) = self.contact.notice() {
            form = form.push(
                container(
                    row![
                        text(notice.text.as_str()).size(14),
                        Space::new().width(Length::Fill),
                        button(bootstrap::x_lg().size(14))
                            .on_press(Message::DismissNotice)
                            .padding(4)
                            .style(nav_button_style(pal, false)),
                    ]
                    .align_y(Alignment::Center),
                )
                .padding([10, 14])
                .width(Length::Fill)
                .style(notice_style(pal, notice.kind)),
            );
        }

        column![
            self.section_title("Get In Touch", "Have a project in mind? Let's talk.", pal),
            row![
                container(channels).width(Length::FillPortion(2)),
                container(form)
                    .padding(24)
                    .width(Length::FillPortion(3))
                    .style(card_style(pal)),
            ]
            .spacing(24),
        ]
        .spacing(24)
        .into()
    }

    fn footer(&self, pal: PaletteColors) -> Element<'_, Message> {
        let footer = &self.portfolio.footer;

        let socials = footer.socials.iter().fold(Row::new().spacing(10), |row, social| {
            row.push(
                button(social_icon(social.label).size(16))
                    .on_press(Message::OpenLink(social.url.to_string()))
                    .padding(8)
                    .style(icon_button_style(pal)),
            )
        });

        let quick_links = Section::NAV.iter().fold(Row::new().spacing(4), |row, section| {
            row.push(
                button(text(section.label()).size(13))
                    .on_press(Message::NavigateTo(*section))
                    .style(nav_button_style(pal, false)),
            )
        });

        container(
            column![
                label(footer.brand, 20, pal.accent),
                label(footer.tagline, 13, pal.muted),
                quick_links,
                socials,
                label(footer.copyright(showcase_time::current_year()), 12, pal.muted),
            ]
            .spacing(14)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding([32, 0])
        .align_x(Horizontal::Center)
        .into()
    }
}

fn main() -> iced::Result {
    fn get_theme(_: &App) -> iced::Theme {
        app_theme()
    }

    iced::application(App::init, App::update, App::view)
        .title("DevShowcase | Pragyesh Chauhan")
        .subscription(App::subscription)
        .theme(get_theme)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .run()
}
