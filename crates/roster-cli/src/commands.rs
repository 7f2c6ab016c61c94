use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use roster_core::{FileSessionStorage, ProfileStore, SessionGate, StaticCredentialGate};
use roster_ingest::{profiles_to_csv, write_profiles};
use roster_model::{
    Languages, ProfileDraft, ProfileId, ProfilePatch, QueryParams, SortDirection, SortKey,
    SortSpec,
};
use tracing::{info, info_span, warn};

use crate::cli::{AddArgs, Command, ListArgs, UpdateArgs, ViewArg};
use crate::logging::redact_value;
use crate::views::{NO_RESULTS, profile_card, profile_table, skills_table};

/// Where the roster and the session live, and how to render.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub data: PathBuf,
    pub session_file: PathBuf,
    pub styled: bool,
}

type Gate = StaticCredentialGate<FileSessionStorage>;

impl RunContext {
    fn gate(&self) -> Gate {
        StaticCredentialGate::new(FileSessionStorage::new(&self.session_file))
    }

    fn load_store(&self) -> Result<ProfileStore> {
        let store = ProfileStore::load_from_path(&self.data);
        if let Some(message) = store.error() {
            bail!("{message}");
        }
        Ok(store)
    }

    fn output_path<'a>(&'a self, output: Option<&'a Path>) -> &'a Path {
        output.unwrap_or(&self.data)
    }
}

pub fn run<W: Write>(command: &Command, ctx: &RunContext, out: &mut W) -> Result<()> {
    let span = info_span!("command", name = command_name(command));
    let _guard = span.enter();
    match command {
        Command::List(args) => run_list(args, ctx, out),
        Command::Show { id } => run_show(id, ctx, out),
        Command::Skills => run_skills(ctx, out),
        Command::Export { output } => run_export(output.as_deref(), ctx, out),
        Command::Login { username, password } => run_login(username, password, ctx, out),
        Command::Logout => {
            ctx.gate().logout();
            writeln!(out, "Logged out")?;
            Ok(())
        }
        Command::Whoami => run_whoami(ctx, out),
        Command::Add(args) => run_add(args, ctx, out),
        Command::Update(args) => run_update(args, ctx, out),
        Command::Delete { id, output } => run_delete(id, output.output.as_deref(), ctx, out),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List(_) => "list",
        Command::Show { .. } => "show",
        Command::Skills => "skills",
        Command::Export { .. } => "export",
        Command::Login { .. } => "login",
        Command::Logout => "logout",
        Command::Whoami => "whoami",
        Command::Add(_) => "add",
        Command::Update(_) => "update",
        Command::Delete { .. } => "delete",
    }
}

/// Query parameters for `list`.
pub fn list_params(args: &ListArgs) -> QueryParams {
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let mut params = QueryParams::default()
        .with_search(args.search.as_str())
        .with_skill(args.skill.as_str())
        .with_sort(SortSpec::new(SortKey::parse(&args.sort), direction));
    if let Some(language) = args.language {
        params = params.with_language(language, args.min_level);
    }
    params
}

fn run_list<W: Write>(args: &ListArgs, ctx: &RunContext, out: &mut W) -> Result<()> {
    let mut store = ctx.load_store()?;
    store.set_params(list_params(args));
    let view = store.view();
    if view.is_empty() {
        writeln!(out, "{NO_RESULTS}")?;
        return Ok(());
    }
    match args.view {
        ViewArg::Table => writeln!(out, "{}", profile_table(view, ctx.styled))?,
        ViewArg::Cards => {
            for profile in view {
                writeln!(out, "{}", profile_card(profile, ctx.styled))?;
            }
        }
    }
    writeln!(
        out,
        "Showing {} of {} profiles",
        view.len(),
        store.profiles().len()
    )?;
    Ok(())
}

fn run_show<W: Write>(id: &str, ctx: &RunContext, out: &mut W) -> Result<()> {
    let mut store = ctx.load_store()?;
    let id = ProfileId::new(id)?;
    store.select(Some(&id));
    let profile = store
        .selected()
        .ok_or_else(|| anyhow!("no profile with id {id}"))?;
    writeln!(out, "{}", profile_card(profile, ctx.styled))?;
    Ok(())
}

fn run_skills<W: Write>(ctx: &RunContext, out: &mut W) -> Result<()> {
    let store = ctx.load_store()?;
    let skills = store.unique_skills();
    if skills.is_empty() {
        writeln!(out, "No skills recorded")?;
    } else {
        writeln!(out, "{}", skills_table(&skills, ctx.styled))?;
    }
    Ok(())
}

fn run_export<W: Write>(output: Option<&Path>, ctx: &RunContext, out: &mut W) -> Result<()> {
    let store = ctx.load_store()?;
    match output {
        Some(path) => {
            persist(&store, path)?;
            writeln!(
                out,
                "Exported {} profiles to {}",
                store.profiles().len(),
                path.display()
            )?;
        }
        None => {
            let csv = profiles_to_csv(store.profiles()).context("render roster as CSV")?;
            out.write_all(csv.as_bytes())?;
        }
    }
    Ok(())
}

fn run_login<W: Write>(
    username: &str,
    password: &str,
    ctx: &RunContext,
    out: &mut W,
) -> Result<()> {
    let mut gate = ctx.gate();
    if !gate.login(username, password) {
        bail!("invalid username or password");
    }
    let role = match gate.current_user() {
        Some(user) if user.is_admin => " (admin)",
        _ => "",
    };
    writeln!(out, "Logged in as {username}{role}")?;
    Ok(())
}

fn run_whoami<W: Write>(ctx: &RunContext, out: &mut W) -> Result<()> {
    match ctx.gate().current_user() {
        Some(user) if user.is_admin => writeln!(out, "{} (admin)", user.username)?,
        Some(user) => writeln!(out, "{}", user.username)?,
        None => writeln!(out, "Not logged in")?,
    }
    Ok(())
}

fn run_add<W: Write>(args: &AddArgs, ctx: &RunContext, out: &mut W) -> Result<()> {
    require_session(ctx)?;
    let draft = draft_from_args(args);
    draft.validate()?;
    let mut store = ctx.load_store()?;
    let name = draft.name.clone();
    let id = store.create(draft);
    info!(id = %id, name = redact_value(&name), "profile added");
    persist(&store, ctx.output_path(args.output.output.as_deref()))?;
    // Ids follow row positions once the written file is loaded again.
    let saved_id = ProfileId::for_row(store.profiles().len().saturating_sub(1));
    writeln!(out, "Added {saved_id}")?;
    Ok(())
}

fn run_update<W: Write>(args: &UpdateArgs, ctx: &RunContext, out: &mut W) -> Result<()> {
    require_session(ctx)?;
    let id = ProfileId::new(args.id.as_str())?;
    let mut store = ctx.load_store()?;
    let Some(existing) = store.get(&id) else {
        warn!(id = %id, "update skipped: no such profile");
        writeln!(out, "No profile with id {id}; nothing changed")?;
        return Ok(());
    };
    let patch = patch_from_args(args, existing.languages);
    if patch.is_empty() {
        bail!("nothing to update: pass at least one field to change");
    }
    patch.validate()?;
    store.update(&id, &patch);
    if let Some(name) = &patch.name {
        info!(id = %id, name = redact_value(name), "profile renamed");
    }
    persist(&store, ctx.output_path(args.output.output.as_deref()))?;
    writeln!(out, "Updated {id}")?;
    Ok(())
}

fn run_delete<W: Write>(
    id: &str,
    output: Option<&Path>,
    ctx: &RunContext,
    out: &mut W,
) -> Result<()> {
    require_session(ctx)?;
    let id = ProfileId::new(id)?;
    let mut store = ctx.load_store()?;
    if store.get(&id).is_none() {
        warn!(id = %id, "delete skipped: no such profile");
        writeln!(out, "No profile with id {id}; nothing changed")?;
        return Ok(());
    }
    store.delete(&id);
    persist(&store, ctx.output_path(output))?;
    writeln!(out, "Deleted {id}")?;
    Ok(())
}

fn require_session(ctx: &RunContext) -> Result<()> {
    if ctx.gate().is_authenticated() {
        Ok(())
    } else {
        bail!("authentication required: run `roster login <USERNAME> <PASSWORD>` first")
    }
}

fn persist(store: &ProfileStore, path: &Path) -> Result<()> {
    write_profiles(store.profiles(), path)
        .with_context(|| format!("write roster to {}", path.display()))?;
    info!(
        path = %path.display(),
        profile_count = store.profiles().len(),
        "roster written"
    );
    Ok(())
}

fn draft_from_args(args: &AddArgs) -> ProfileDraft {
    let mut draft = ProfileDraft::new(args.name.trim())
        .with_image(args.image.trim())
        .with_languages(args.levels.apply(Languages::default()));
    for skill in &args.skills {
        draft = draft.with_skill(skill);
    }
    for hobby in &args.hobbies {
        draft = draft.with_hobby(hobby);
    }
    for interest in &args.interests {
        draft = draft.with_interest(interest);
    }
    draft
}

fn patch_from_args(args: &UpdateArgs, current: Languages) -> ProfilePatch {
    ProfilePatch {
        name: args.name.as_deref().map(|name| name.trim().to_string()),
        image: args.image.as_deref().map(|image| image.trim().to_string()),
        languages: (!args.levels.is_empty()).then(|| args.levels.apply(current)),
        skills: args.skills.as_deref().map(clean_items),
        hobbies: args.hobbies.as_deref().map(clean_items),
        interests: args.interests.as_deref().map(clean_items),
    }
}

fn clean_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
