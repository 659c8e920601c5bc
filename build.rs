use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> anyhow::Result<()> {
    // VERGEN_GIT_BRANCH and VERGEN_GIT_SHA feed `placer --version`
    let git = GitclBuilder::default().branch(true).sha(true).build()?;

    Emitter::default().add_instructions(&git)?.emit()?;

    Ok(())
}
