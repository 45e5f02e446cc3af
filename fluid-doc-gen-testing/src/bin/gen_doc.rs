use fluid_doc_gen::Result;

fn main() -> Result<()> {
    fluid_doc_gen::cli::main_with(fluid_doc_gen_testing::library()?)
}
