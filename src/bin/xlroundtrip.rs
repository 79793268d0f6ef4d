fn main() {
    xltools::init_logging();
    if let Err(err) = xltools::cells::run_roundtrip(std::env::args_os()) {
        eprintln!("读写 Excel 文件时出错: {err:#}");
        std::process::exit(1);
    }
}
