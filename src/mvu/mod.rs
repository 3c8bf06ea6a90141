// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Root Model-View-Update kernel wiring screen routing, component state, messages, and commands.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config::{AppConfig, Timings};
use crate::logic::auth::{self, Registration};
use crate::logic::verifier::{AccessVerifier, ReferenceVerifier};
use crate::logic::{generator, report, settings_store};
use crate::models::join::JoinRequest;
use crate::models::participant::Participant;
use crate::models::question::{Question, sample_live_question};
use crate::models::settings::HostSettings;
use crate::models::user::{Role, User};
use crate::ui::components::audio_capture::{self, AudioCaptureModel, AudioCommand, AudioMsg};
use crate::ui::components::forgot_password::{
    self, ForgotPasswordCommand, ForgotPasswordEvent, ForgotPasswordModel, ForgotPasswordMsg,
};
use crate::ui::components::join_room::{self, JoinCommand, JoinEvent, JoinMsg, JoinRoomModel};
use crate::ui::components::leaderboard::{self, LeaderboardModel, LeaderboardMsg};
use crate::ui::components::loader::{self, LoaderEvent, LoaderModel, LoaderMsg};
use crate::ui::components::login::{self, LoginCommand, LoginEvent, LoginModel, LoginMsg};
use crate::ui::components::overview::{self, OverviewEvent, OverviewModel, OverviewMsg};
use crate::ui::components::participants::{
    self, ParticipantsCommand, ParticipantsEvent, ParticipantsModel, ParticipantsMsg,
};
use crate::ui::components::question_feed::{
    self, QuestionEvent, QuestionFeedModel, QuestionMsg,
};
use crate::ui::components::register::{
    self, RegisterCommand, RegisterEvent, RegisterModel, RegisterMsg,
};
use crate::ui::components::settings::{
    self, SettingsCommand, SettingsEvent, SettingsModel, SettingsMsg,
};
use crate::ui::components::sidebar::{self, SidebarEvent, SidebarModel, SidebarMsg};
use crate::ui::components::student_dashboard::{
    self, StudentCommand, StudentDashboardModel, StudentEvent, StudentMsg,
};

/// Which top-level screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Loading,
    Login,
    Register,
    ForgotPassword,
    JoinRoom,
    HostDashboard,
    StudentDashboard,
}

/// Top-level application state.
pub struct AppModel {
    pub screen: Screen,
    /// Signed-in user, if any.
    pub user: Option<User>,
    /// Room code the join form starts with.
    pub prefill_room_code: Option<String>,
    pub loader: LoaderModel,
    pub login: LoginModel,
    pub register: RegisterModel,
    pub forgot_password: ForgotPasswordModel,
    pub join: JoinRoomModel,
    pub student: StudentDashboardModel,
    pub sidebar: SidebarModel,
    pub overview: OverviewModel,
    pub audio: AudioCaptureModel,
    pub questions: QuestionFeedModel,
    pub participants: ParticipantsModel,
    pub leaderboard: LeaderboardModel,
    pub settings: SettingsModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(config: &AppConfig, settings: HostSettings) -> Self {
        let prefill_room_code = config.prefill_room_code.clone();
        Self {
            screen: Screen::Loading,
            user: None,
            join: fresh_join(prefill_room_code.as_deref()),
            prefill_room_code,
            loader: LoaderModel::new(config.timings.launch()),
            login: LoginModel::default(),
            register: RegisterModel::default(),
            forgot_password: ForgotPasswordModel::default(),
            student: StudentDashboardModel::default(),
            sidebar: SidebarModel::default(),
            overview: OverviewModel::default(),
            audio: AudioCaptureModel::with_microphone(&settings.audio_input),
            questions: QuestionFeedModel::with_default_timer(settings.default_timer_secs),
            participants: ParticipantsModel::default(),
            leaderboard: LeaderboardModel::default(),
            settings: SettingsModel::new(settings),
            status: None,
            error: None,
            pending_commands: 0,
        }
    }
}

fn fresh_join(prefill: Option<&str>) -> JoinRoomModel {
    prefill.map_or_else(JoinRoomModel::default, JoinRoomModel::with_room_code)
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    /// Frame time elapsed since the previous tick.
    Tick(Duration),
    Login(LoginMsg),
    Register(RegisterMsg),
    ForgotPassword(ForgotPasswordMsg),
    Join(JoinMsg),
    Student(StudentMsg),
    Sidebar(SidebarMsg),
    Overview(OverviewMsg),
    Audio(AudioMsg),
    Questions(QuestionMsg),
    Participants(ParticipantsMsg),
    Leaderboard(LeaderboardMsg),
    Settings(SettingsMsg),
    QuestionsGenerated(Vec<Question>),
    ReportExported(Result<PathBuf, String>),
    MeetingOpened(Result<(), String>),
    DismissError,
}

/// Commands represent side-effects executed between frames.
#[derive(Debug)]
pub enum Command {
    SignIn { email: String, role: Role },
    Register(Registration),
    SendResetLink(String),
    VerifyAccess { attempt: u64, request: JoinRequest },
    HoldSuccess { attempt: u64 },
    DeliverQuestion { visit: u64 },
    RevealResult { visit: u64 },
    GenerateQuestions { transcript: String, timer_secs: u32 },
    ExportReport { participant: Participant, output: PathBuf },
    SaveSettings(HostSettings),
    OpenMeeting(String),
}

/// What command execution needs from the outside world.
pub struct CommandEnv {
    pub verifier: Box<dyn AccessVerifier>,
    pub timings: Timings,
    pub settings_path: PathBuf,
}

impl CommandEnv {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            verifier: Box::new(ReferenceVerifier::new(config.join.clone())),
            timings: config.timings,
            settings_path: config.settings_path.clone(),
        }
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Tick(dt) => tick(model, dt, cmds),
        Msg::DismissError => model.error = None,
        Msg::Login(m) => {
            let mut login_cmds = Vec::new();
            let event = login::update(&mut model.login, m, &mut login_cmds);
            for c in login_cmds {
                match c {
                    LoginCommand::SignIn { email, role } => {
                        cmds.push(Command::SignIn { email, role })
                    }
                }
            }
            match event {
                Some(LoginEvent::LoggedIn(user)) => enter_session(model, user),
                Some(LoginEvent::ShowRegister) => model.screen = Screen::Register,
                Some(LoginEvent::ShowForgotPassword) => model.screen = Screen::ForgotPassword,
                None => {}
            }
        }
        Msg::Register(m) => {
            let mut reg_cmds = Vec::new();
            let event = register::update(&mut model.register, m, &mut reg_cmds);
            for c in reg_cmds {
                match c {
                    RegisterCommand::Register(form) => cmds.push(Command::Register(form)),
                }
            }
            match event {
                Some(RegisterEvent::Registered(message)) => {
                    model.screen = Screen::Login;
                    surface_event(model, message, false);
                }
                Some(RegisterEvent::BackToLogin) => model.screen = Screen::Login,
                None => {}
            }
        }
        Msg::ForgotPassword(m) => {
            let mut fp_cmds = Vec::new();
            let event = forgot_password::update(&mut model.forgot_password, m, &mut fp_cmds);
            for c in fp_cmds {
                match c {
                    ForgotPasswordCommand::SendResetLink(email) => {
                        cmds.push(Command::SendResetLink(email))
                    }
                }
            }
            if let Some(ForgotPasswordEvent::BackToLogin) = event {
                model.screen = Screen::Login;
            }
        }
        Msg::Join(m) => {
            let mut join_cmds = Vec::new();
            let event = join_room::update(&mut model.join, m, &mut join_cmds);
            for c in join_cmds {
                match c {
                    JoinCommand::Verify { attempt, request } => {
                        cmds.push(Command::VerifyAccess { attempt, request })
                    }
                    JoinCommand::HoldSuccess { attempt } => {
                        cmds.push(Command::HoldSuccess { attempt })
                    }
                }
            }
            match event {
                Some(JoinEvent::Granted(request)) => {
                    let user_name = model
                        .user
                        .as_ref()
                        .map(|u| u.name.clone())
                        .unwrap_or_default();
                    surface_event(model, format!("Joined room {}", request.room_code), false);
                    model.screen = Screen::StudentDashboard;
                    student_update(
                        model,
                        StudentMsg::Enter {
                            user_name,
                            session: request,
                        },
                        cmds,
                    );
                }
                Some(JoinEvent::Left) => logout(model),
                None => {}
            }
        }
        Msg::Student(m) => student_update(model, m, cmds),
        Msg::Sidebar(m) => {
            if let Some(SidebarEvent::LoggedOut) = sidebar::update(&mut model.sidebar, m) {
                logout(model);
            }
        }
        Msg::Overview(m) => match overview::update(&mut model.overview, m) {
            Some(OverviewEvent::RoomCreated(code)) => {
                surface_event(model, format!("Room {code} is open for joining"), false)
            }
            Some(OverviewEvent::Notice(text)) => surface_event(model, text, false),
            None => {}
        },
        Msg::Audio(m) => audio_update(model, m, cmds),
        Msg::Questions(m) => questions_update(model, m),
        Msg::QuestionsGenerated(questions) => {
            audio_update(model, AudioMsg::GenerationFinished, cmds);
            questions_update(model, QuestionMsg::Generated(questions));
        }
        Msg::Participants(m) => {
            let mut p_cmds = Vec::new();
            if let Some(ParticipantsEvent::Notice(text)) =
                participants::update(&mut model.participants, m, &mut p_cmds)
            {
                surface_event(model, text, false);
            }
            for c in p_cmds {
                match c {
                    ParticipantsCommand::ExportReport {
                        participant,
                        output,
                    } => cmds.push(Command::ExportReport {
                        participant,
                        output,
                    }),
                }
            }
        }
        Msg::ReportExported(result) => match result {
            Ok(path) => surface_event(model, format!("Report saved: {}", path.display()), false),
            Err(err) => surface_event(model, format!("Failed to export report:\n\n{err}"), true),
        },
        Msg::Leaderboard(m) => leaderboard::update(&mut model.leaderboard, m),
        Msg::Settings(m) => {
            let mut s_cmds = Vec::new();
            let event = settings::update(&mut model.settings, m, &mut s_cmds);
            for c in s_cmds {
                match c {
                    SettingsCommand::Persist(values) => cmds.push(Command::SaveSettings(values)),
                }
            }
            match event {
                Some(SettingsEvent::Applied(values)) => {
                    questions_update(
                        model,
                        QuestionMsg::DefaultTimerChanged(values.default_timer_secs),
                    );
                    audio_update(model, AudioMsg::MicrophoneSelected(values.audio_input), cmds);
                    surface_event(model, "Settings saved.".into(), false);
                }
                Some(SettingsEvent::Notice(text)) => surface_event(model, text, false),
                Some(SettingsEvent::Error(text)) => surface_event(model, text, true),
                None => {}
            }
        }
        Msg::MeetingOpened(result) => {
            if let Err(err) = result {
                surface_event(model, format!("Could not open the meeting link:\n\n{err}"), true);
            }
        }
    }
}

fn tick(model: &mut AppModel, dt: Duration, cmds: &mut Vec<Command>) {
    match model.screen {
        Screen::Loading => {
            if let Some(LoaderEvent::Finished) = loader::update(&mut model.loader, LoaderMsg::Tick(dt))
            {
                log::debug!("Launch finished");
                model.screen = Screen::Login;
            }
        }
        Screen::StudentDashboard => student_update(model, StudentMsg::Tick(dt), cmds),
        Screen::HostDashboard => audio_update(model, AudioMsg::Tick(dt), cmds),
        _ => {}
    }
}

/// Route a freshly signed-in user to their landing screen.
fn enter_session(model: &mut AppModel, user: User) {
    log::info!("{} signed in as {}", user.email, user.role.label());
    model.screen = match user.role {
        Role::Host => Screen::HostDashboard,
        Role::Student => {
            model.join = fresh_join(model.prefill_room_code.as_deref());
            Screen::JoinRoom
        }
    };
    surface_event(model, format!("Signed in as {}", user.name), false);
    model.user = Some(user);
}

fn logout(model: &mut AppModel) {
    if let Some(user) = model.user.take() {
        log::info!("{} signed out", user.email);
    }
    model.join = fresh_join(model.prefill_room_code.as_deref());
    model.sidebar = SidebarModel::default();
    model.screen = Screen::Login;
    surface_event(model, "Signed out.".into(), false);
}

fn student_update(model: &mut AppModel, msg: StudentMsg, cmds: &mut Vec<Command>) {
    let mut s_cmds = Vec::new();
    let event = student_dashboard::update(&mut model.student, msg, &mut s_cmds);
    for c in s_cmds {
        cmds.push(match c {
            StudentCommand::DeliverQuestion { visit } => Command::DeliverQuestion { visit },
            StudentCommand::RevealResult { visit } => Command::RevealResult { visit },
            StudentCommand::OpenMeeting(link) => Command::OpenMeeting(link),
        });
    }
    if let Some(StudentEvent::LoggedOut) = event {
        logout(model);
    }
}

fn audio_update(model: &mut AppModel, msg: AudioMsg, cmds: &mut Vec<Command>) {
    let mut a_cmds = Vec::new();
    if let Some(audio_capture::AudioEvent::Notice(text)) =
        audio_capture::update(&mut model.audio, msg, &mut a_cmds)
    {
        surface_event(model, text, false);
    }
    for c in a_cmds {
        match c {
            AudioCommand::GenerateQuestions { transcript } => {
                cmds.push(Command::GenerateQuestions {
                    transcript,
                    timer_secs: model.settings.applied().default_timer_secs,
                })
            }
        }
    }
}

fn questions_update(model: &mut AppModel, msg: QuestionMsg) {
    match question_feed::update(&mut model.questions, msg) {
        Some(QuestionEvent::Launched(text)) => {
            surface_event(model, format!("Poll launched: {text}"), false)
        }
        Some(QuestionEvent::Notice(text)) => surface_event(model, text, false),
        Some(QuestionEvent::Error(text)) => surface_event(model, text, true),
        None => {}
    }
}

/// Execute a command on a worker thread and return the resulting message.
///
/// Simulated service latency is a plain sleep; commands never touch the model.
pub fn run_command(cmd: Command, env: &CommandEnv) -> Msg {
    let pause = |ms: u64| {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    };
    let t = env.timings;

    match cmd {
        Command::SignIn { email, role } => {
            pause(t.auth_ms);
            Msg::Login(LoginMsg::SignedIn(auth::sign_in(&email, role)))
        }
        Command::Register(form) => {
            pause(t.auth_ms);
            Msg::Register(RegisterMsg::Completed(auth::register(&form)))
        }
        Command::SendResetLink(email) => {
            pause(t.auth_ms);
            Msg::ForgotPassword(ForgotPasswordMsg::LinkSent(auth::send_reset_link(&email)))
        }
        Command::VerifyAccess { attempt, request } => {
            pause(t.validation_ms);
            let verdict = env.verifier.verify(&request);
            log::info!("Join attempt {attempt}: {verdict:?}");
            Msg::Join(JoinMsg::VerificationFinished { attempt, verdict })
        }
        Command::HoldSuccess { attempt } => {
            pause(t.success_hold_ms);
            Msg::Join(JoinMsg::SuccessShown { attempt })
        }
        Command::DeliverQuestion { visit } => {
            pause(t.question_arrival_ms);
            Msg::Student(StudentMsg::QuestionDelivered {
                visit,
                question: sample_live_question(),
            })
        }
        Command::RevealResult { visit } => {
            pause(t.result_reveal_ms);
            Msg::Student(StudentMsg::ResultRevealed { visit })
        }
        Command::GenerateQuestions {
            transcript,
            timer_secs,
        } => {
            pause(t.generation_ms);
            Msg::QuestionsGenerated(generator::generate_questions(&transcript, timer_secs))
        }
        Command::ExportReport {
            participant,
            output,
        } => {
            let res = report::write_participant_report(
                &output,
                &participant,
                time::OffsetDateTime::now_utc(),
            )
            .map(|_| output);
            Msg::ReportExported(res.map_err(|e| format!("{e:#}")))
        }
        Command::SaveSettings(values) => {
            let res = settings_store::save_settings(&env.settings_path, &values);
            if let Err(err) = &res {
                log::warn!("Saving settings failed: {err:#}");
            }
            Msg::Settings(SettingsMsg::Saved(res.map_err(|e| format!("{e:#}"))))
        }
        Command::OpenMeeting(link) => {
            Msg::MeetingOpened(open::that(&link).map_err(|e| e.to_string()))
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        log::warn!("{message}");
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::join::DenialReason;
    use crate::ui::components::join_room::JoinStep;
    use crate::ui::components::sidebar::HostSection;
    use crate::ui::components::student_dashboard::QuestionPhase;
    use tempfile::TempDir;

    const GOOD_LINK: &str = "https://meet.google.com/abc-defg-hij";

    fn config() -> AppConfig {
        AppConfig {
            timings: Timings::instant(),
            ..Default::default()
        }
    }

    fn model() -> AppModel {
        AppModel::new(&config(), HostSettings::default())
    }

    /// Apply `msg`, then run every resulting command until the queue is empty.
    fn drive(model: &mut AppModel, env: &CommandEnv, msg: Msg) {
        let mut queue = vec![msg];
        while let Some(msg) = queue.pop() {
            let mut cmds = Vec::new();
            update(model, msg, &mut cmds);
            queue.extend(cmds.into_iter().map(|c| run_command(c, env)));
        }
    }

    fn sign_in(model: &mut AppModel, env: &CommandEnv, role: Role) {
        model.screen = Screen::Login;
        drive(model, env, Msg::Login(LoginMsg::EmailChanged("ada@student.edu".into())));
        drive(model, env, Msg::Login(LoginMsg::PasswordChanged("secret".into())));
        drive(model, env, Msg::Login(LoginMsg::RoleSelected(role)));
        drive(model, env, Msg::Login(LoginMsg::Submit));
    }

    fn fill_join(model: &mut AppModel, env: &CommandEnv, email: &str, link: &str, code: &str) {
        drive(model, env, Msg::Join(JoinMsg::EmailChanged(email.into())));
        drive(model, env, Msg::Join(JoinMsg::MeetingLinkChanged(link.into())));
        drive(model, env, Msg::Join(JoinMsg::RoomCodeChanged(code.into())));
    }

    #[test]
    fn loader_hands_over_to_login() {
        let cfg = AppConfig::default();
        let mut model = AppModel::new(&cfg, HostSettings::default());
        let mut cmds = Vec::new();

        update(&mut model, Msg::Tick(Duration::from_millis(2999)), &mut cmds);
        assert_eq!(model.screen, Screen::Loading);
        update(&mut model, Msg::Tick(Duration::from_millis(1)), &mut cmds);
        assert_eq!(model.screen, Screen::Login);
        assert!(cmds.is_empty());
    }

    #[test]
    fn host_and_student_land_on_their_screens() {
        let env = CommandEnv::new(&config());

        let mut host = model();
        sign_in(&mut host, &env, Role::Host);
        assert_eq!(host.screen, Screen::HostDashboard);
        assert_eq!(host.user.as_ref().map(|u| u.name.as_str()), Some("John Doe"));

        let mut student = model();
        sign_in(&mut student, &env, Role::Student);
        assert_eq!(student.screen, Screen::JoinRoom);
    }

    #[test]
    fn student_join_flow_reaches_dashboard_and_question() {
        let env = CommandEnv::new(&config());
        let mut model = model();
        sign_in(&mut model, &env, Role::Student);

        fill_join(&mut model, &env, "ada@student.edu", GOOD_LINK, "742193");
        drive(&mut model, &env, Msg::Join(JoinMsg::Submit));

        assert_eq!(model.screen, Screen::StudentDashboard);
        assert_eq!(
            model.student.session().map(|s| s.room_code.as_str()),
            Some("742193")
        );
        assert_eq!(model.student.phase(), QuestionPhase::Answering);
        assert!(model.error.is_none());
    }

    #[test]
    fn wrong_room_code_is_denied_then_retry_keeps_values() {
        let env = CommandEnv::new(&config());
        let mut model = model();
        sign_in(&mut model, &env, Role::Student);

        fill_join(&mut model, &env, "ada@student.edu", GOOD_LINK, "123456");
        drive(&mut model, &env, Msg::Join(JoinMsg::Submit));
        assert_eq!(
            model.join.step(),
            JoinStep::Denied(DenialReason::InvalidRoomCode)
        );
        assert_eq!(model.screen, Screen::JoinRoom);

        drive(&mut model, &env, Msg::Join(JoinMsg::Retry));
        assert_eq!(model.join.step(), JoinStep::Form);
        assert_eq!(model.join.room_code(), "123456");
        assert!(model.join.errors().is_empty());
    }

    #[test]
    fn link_that_passes_the_guard_can_still_be_denied() {
        let env = CommandEnv::new(&config());
        let mut model = model();
        sign_in(&mut model, &env, Role::Student);

        fill_join(
            &mut model,
            &env,
            "ada@student.edu",
            "https://meet.google.com/lookup",
            "742193",
        );
        drive(&mut model, &env, Msg::Join(JoinMsg::Submit));

        assert_eq!(
            model.join.step(),
            JoinStep::Denied(DenialReason::InvalidMeetingLink)
        );
    }

    #[test]
    fn leaving_the_join_flow_signs_out() {
        let env = CommandEnv::new(&config());
        let mut model = model();
        sign_in(&mut model, &env, Role::Student);

        drive(&mut model, &env, Msg::Join(JoinMsg::BackToHome));

        assert_eq!(model.screen, Screen::Login);
        assert!(model.user.is_none());
    }

    #[test]
    fn sidebar_logout_clears_user() {
        let env = CommandEnv::new(&config());
        let mut model = model();
        sign_in(&mut model, &env, Role::Host);
        drive(
            &mut model,
            &env,
            Msg::Sidebar(SidebarMsg::Select(HostSection::Participants)),
        );

        drive(&mut model, &env, Msg::Sidebar(SidebarMsg::Logout));

        assert_eq!(model.screen, Screen::Login);
        assert!(model.user.is_none());
        assert_eq!(model.sidebar.active, HostSection::Dashboard);
    }

    #[test]
    fn generated_questions_land_in_the_feed() {
        let env = CommandEnv::new(&config());
        let mut model = model();
        sign_in(&mut model, &env, Role::Host);
        let before = model.questions.questions().len();

        drive(&mut model, &env, Msg::Audio(AudioMsg::Start));
        drive(&mut model, &env, Msg::Tick(Duration::from_secs(6)));
        drive(&mut model, &env, Msg::Audio(AudioMsg::Generate));

        assert!(model.questions.questions().len() > before);
        assert!(!model.audio.is_generating());
    }

    #[test]
    fn report_export_writes_json() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("alice_report.json");
        let env = CommandEnv::new(&config());
        let mut model = model();

        drive(
            &mut model,
            &env,
            Msg::Participants(ParticipantsMsg::ExportRequested {
                id: "1".into(),
                output: output.clone(),
            }),
        );

        assert!(output.exists());
        assert!(model.error.is_none());
        assert!(
            model
                .status
                .as_deref()
                .is_some_and(|s| s.starts_with("Report saved"))
        );
    }

    #[test]
    fn saved_settings_persist_and_seed_new_questions() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig {
            settings_path: tmp.path().join("settings.json"),
            ..config()
        };
        let env = CommandEnv::new(&cfg);
        let mut model = AppModel::new(&cfg, HostSettings::default());

        drive(&mut model, &env, Msg::Settings(SettingsMsg::DefaultTimer(75)));
        drive(&mut model, &env, Msg::Settings(SettingsMsg::Save));
        drive(&mut model, &env, Msg::Questions(QuestionMsg::AddQuestion));

        assert_eq!(
            settings_store::load_or_default(&cfg.settings_path).default_timer_secs,
            75
        );
        assert_eq!(model.questions.questions()[0].timer_secs, 75);
    }

    #[test]
    fn launching_unapproved_question_surfaces_error() {
        let mut model = model();
        let mut cmds = Vec::new();

        update(&mut model, Msg::Questions(QuestionMsg::Launch("1".into())), &mut cmds);
        assert!(model.error.is_some());

        update(&mut model, Msg::DismissError, &mut cmds);
        assert!(model.error.is_none());
        assert!(model.status.is_some());
    }
}
