use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_with_config() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("divisors 16")
        .assert()
        .success()
        .stdout(predicate::eq(
            "> divisors 16\nDivisors of 16: 1, 2, 4, 8, 16\n",
        ));
}

#[test]
fn test_multiple_queries() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("factors 60")
        .arg("fib 15")
        .assert()
        .success()
        .stdout(predicate::eq(
            "> factors 60\nPrime factors of 60: 2, 3, 5\n> fib 15\nF(15) = 610\n",
        ));
}

#[test]
fn test_invalid_input() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("divisors 0")
        .assert()
        .failure()
        .stdout(predicate::eq(
            "> divisors 0\ndivisors is only defined for positive integers, got 0\n",
        ));
}

#[test]
fn test_unknown_command() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("divisrs 6")
        .assert()
        .failure()
        .stdout(predicate::eq(
            "> divisrs 6\nNo such command divisrs, did you mean divisors?\n",
        ));
}

#[test]
fn test_invalid_config() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("config_that_doesnt_exist.toml")
        .arg("divisors 6")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to read provided config file `config_that_doesnt_exist.toml`",
        ));
}

#[test]
fn test_run_file() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("tests/example.queries")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Divisors of 60: 1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60\n\
             Prime factors of 60: 2, 3, 5\n\
             Factorization: 60 = 2^2 * 3 * 5\n",
        ));
}

#[test]
fn test_missing_file() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("tests/no_such.queries")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to open input file `tests/no_such.queries`",
        ));
}

#[test]
fn test_file_with_failing_query() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("-")
        .write_stdin("divisors 6\ndivisors 0\nduplicates 1, 2, 1\n")
        .assert()
        .failure()
        .stdout(predicate::eq(
            "Divisors of 6: 1, 2, 3, 6\n\
             divisors is only defined for positive integers, got 0\n\
             1, 2, 1 contains duplicates\n",
        ));
}

#[test]
fn test_run_stdin() {
    let mut cmd = Command::cargo_bin("numlab").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("-")
        .write_stdin("armstrong 153\npalindrome racecar")
        .assert()
        .success()
        .stdout(predicate::eq(
            "153 is an Armstrong number (1^3 + 5^3 + 3^3 = 153)\n\"racecar\" is a palindrome\n",
        ));
}
